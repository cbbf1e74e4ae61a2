use crate::{api::employee, error::ApiError};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed bodies answer with the same `{"message": ...}` shape as
    // every other failure.
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(format!("Invalid request body: {err}")).into()
    });

    cfg.app_data(json_config)
        // /addEmployee
        .service(web::resource("/addEmployee").route(web::post().to(employee::create_employee)))
        // /getEmployees
        .service(web::resource("/getEmployees").route(web::get().to(employee::list_employees)))
        // /updateEmployee/{id}
        .service(
            web::resource("/updateEmployee/{id}").route(web::put().to(employee::update_employee)),
        )
        // /deleteEmployee/{id}
        .service(
            web::resource("/deleteEmployee/{id}")
                .route(web::delete().to(employee::delete_employee)),
        );
}
