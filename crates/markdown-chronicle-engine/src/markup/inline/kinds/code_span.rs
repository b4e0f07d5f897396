/// Inline code span with owned delimiter constant.
///
/// Code spans are raw zones: no other inline construct matches inside them,
/// which is why the parser probes them first at every position.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: &'static str = "`";
}
