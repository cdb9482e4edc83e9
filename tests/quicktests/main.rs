#[path = "../../src/test/quick.rs"]
mod quick;
mod tree;

use quick::Op;
