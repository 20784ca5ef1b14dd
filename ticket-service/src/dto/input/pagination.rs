use crate::error::Error;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    ///
    /// indexing starts at 1
    ///
    pub page: u32,
    pub size: u32,
}

impl Pagination {
    pub fn validate(&self) -> Result<(), Error> {
        if self.page == 0 {
            return Err(Error::Validation("page is required"));
        }
        if self.size == 0 {
            return Err(Error::Validation("size is required"));
        }

        Ok(())
    }
}
