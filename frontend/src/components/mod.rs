pub mod age_field;
pub mod child_search;
pub mod goal_accordion;
pub mod level_select;

pub use age_field::AgeInput;
pub use child_search::ChildSearch;
pub use goal_accordion::GoalAccordion;
pub use level_select::LevelSelect;
