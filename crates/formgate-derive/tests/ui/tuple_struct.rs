use formgate_derive::Form;

#[allow(dead_code)]
#[derive(Form)]
struct Pair(String, String);

fn main() {}
