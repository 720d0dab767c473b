use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use serde::Deserialize;

use crate::dto::api::MedicinesResponse;
use crate::gateway::{HttpGateway, MedicineApi, MedicineSearchQuery};

#[derive(Deserialize)]
struct ApiV1MedicinesQueryParams {
    query: String,
    page: Option<usize>,
}

#[get("/v1/medicines")]
pub async fn api_v1_medicines(
    params: web::Query<ApiV1MedicinesQueryParams>,
    gateway: web::Data<HttpGateway>,
) -> impl Responder {
    let query = MedicineSearchQuery::new(params.query.trim()).page(params.page.unwrap_or(1));

    match gateway.search_medicines(query).await {
        Ok((total, medicines)) => HttpResponse::Ok().json(MedicinesResponse { total, medicines }),
        Err(e) => {
            error!("Failed to search medicines: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
