/// Conditional expression in one line.  `cargo fmt` spreads an
/// `if`/`else` over five lines, and the border rules of the gradient
/// (take the neighbour, or replicate the edge pixel) read much better
/// as a column of one-liners.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
