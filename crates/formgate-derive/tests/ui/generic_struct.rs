use formgate_derive::Form;

#[allow(dead_code)]
#[derive(Form)]
struct Wrapper<T> {
    value: T,
}

fn main() {}
