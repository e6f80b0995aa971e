use services::services::values::ValuesService;

pub mod cli;
pub mod error;
pub mod routes;

/// State shared by every request handler.
#[derive(Clone)]
pub struct Deployment {
    values: ValuesService,
}

impl Deployment {
    pub fn new(values: ValuesService) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &ValuesService {
        &self.values
    }
}
