//! Reference datasets bundled into the build. Used whenever the remote API
//! cannot supply children or goals, and as the seed source for children
//! that arrive without achievements.

use thiserror::Error;

use crate::{Child, Goal};

const CHILD_DATA: &str = include_str!("../data/children.json");
const GOAL_DATA: &str = include_str!("../data/goals.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Bundled {dataset} data is malformed: {source}")]
    Malformed {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub fn child_data() -> Result<Vec<Child>, FixtureError> {
    serde_json::from_str(CHILD_DATA).map_err(|source| FixtureError::Malformed {
        dataset: "child",
        source,
    })
}

pub fn goal_data() -> Result<Vec<Goal>, FixtureError> {
    serde_json::from_str(GOAL_DATA).map_err(|source| FixtureError::Malformed {
        dataset: "goal",
        source,
    })
}
