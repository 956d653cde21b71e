use formgate_derive::Form;

#[allow(dead_code)]
#[derive(Form)]
enum Choice {
    Code,
    CustomerId,
}

fn main() {}
