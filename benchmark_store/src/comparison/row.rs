//!
//! A single measurement compared with its previous result.
//!

///
/// A single measurement compared with its previous result.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    /// The measured operation.
    pub name: &'a str,
    /// The unit of the current result.
    pub unit: &'a str,
    /// The previous result, if the operation was measured before.
    pub previous: Option<f64>,
    /// The current result.
    pub current: f64,
    /// How many times worse the current result is. Values below `1` mean an improvement.
    pub ratio: Option<f64>,
    /// Whether the ratio exceeds the alert threshold.
    pub is_alert: bool,
}
