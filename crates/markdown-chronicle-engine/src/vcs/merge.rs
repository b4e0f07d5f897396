//! Branch-merge content resolution.
//!
//! The policy is blunt: whichever side spans more lines wins outright, and
//! ties keep the target. No line-level reconciliation, no conflict markers.

/// Picks the merge result between a target branch's content and an incoming
/// source branch's content. The source wins only when it is strictly longer
/// in lines.
// TODO: replace with a 3-way line merge that emits conflict markers.
pub fn resolve<'a>(target: &'a str, source: &'a str) -> &'a str {
    let target_lines = target.split('\n').count();
    let source_lines = source.split('\n').count();
    if source_lines > target_lines {
        source
    } else {
        target
    }
}
