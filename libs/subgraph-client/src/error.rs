use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubgraphError {
    #[error("subgraph transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("subgraph returned errors: {0}")]
    GraphQl(String),
}
