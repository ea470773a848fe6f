//! # VEE
//!
//! Interactive terminal session for the VEE language.
//!

fn main() {
    vee::term::main()
}
