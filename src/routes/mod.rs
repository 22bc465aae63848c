use actix_web::web;

pub mod health;
pub mod join;
pub mod login;
pub mod validate;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(web::scope("/join").service(join::join));
    cfg.service(web::scope("/login").service(login::login));
    cfg.service(web::scope("/validate").service(validate::validate));
}
