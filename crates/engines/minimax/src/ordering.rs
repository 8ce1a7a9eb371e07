use crate::rules::Rules;

/// Order moves largest effect first.
///
/// Stable sort on the rules' move weight: the result is a permutation of
/// the input, equal-weight moves keep their generation order (which makes
/// tie-breaks deterministic run to run), and an empty slice passes through
/// untouched.
pub fn order_moves<R: Rules>(rules: &R, moves: &mut [R::Move]) {
    moves.sort_by(|a, b| rules.move_weight(b).cmp(&rules.move_weight(a)));
}
