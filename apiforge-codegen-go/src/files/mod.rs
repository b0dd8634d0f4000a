mod cors;
mod database;
mod go_mod;
mod handler;
mod logger;
mod main_go;
mod model;
mod repository;
mod response;
mod router;
mod utils_go;

pub use cors::CorsGo;
pub use database::DatabaseGo;
pub use go_mod::GoMod;
pub use handler::HandlerGo;
pub use logger::LoggerGo;
pub use main_go::MainGo;
pub use model::ModelGo;
pub use repository::RepositoryGo;
pub use response::ResponseGo;
pub use router::RouterGo;
pub use utils_go::UtilsGo;
