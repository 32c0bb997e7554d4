// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use errors::*;` to get `bail!`-able kinds and the `?` conversions.
error_chain! {

    errors {
        InvalidSize(size: usize) {
            description("invalid maze size")
            display("invalid maze size {}: a maze needs at least one cell", size)
        }

        UnreachableTarget(size: usize) {
            description("maze target is not reachable")
            display("a {0}x{0} maze never opens its target cell, use an odd size", size)
        }

        InvalidMove(c: char) {
            description("invalid move")
            display("invalid move '{}', expected one of u, d, l, r", c)
        }
    }
}
