pub mod config;
pub mod domain {
    pub mod check;
    pub mod record;
    pub mod transaction;
    pub mod verdict;
}
pub mod classifier;
pub mod http {
    pub mod handlers {
        pub mod check;
        pub mod ops;
    }
    pub mod page;
    pub mod router;
}
pub mod service {
    pub mod check_service;
}

#[derive(Clone)]
pub struct AppState {
    pub check_service: service::check_service::CheckService,
}
