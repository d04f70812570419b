use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Staff {
    pub name: String,
    pub role: String,
}
