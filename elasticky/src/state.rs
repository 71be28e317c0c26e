/// A snapshot of the widget's public state, refreshed on every tick.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElastickyState {
    /// The scroll offset read by the latest tick.
    pub dist_y: f64,
    pub is_fixed: bool,
    pub is_shown: bool,
}
