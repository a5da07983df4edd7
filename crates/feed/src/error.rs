use postboard_types::query::InvalidQuery;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Api(#[from] postboard_api::error::Error),

    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] InvalidQuery),

    #[error("Page holds {got} posts, expected at most {limit}")]
    OversizedPage { got: usize, limit: u32 },
}
