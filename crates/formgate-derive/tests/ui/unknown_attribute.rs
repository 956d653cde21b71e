use formgate_derive::Form;

#[allow(dead_code)]
#[derive(Form)]
struct Invitation {
    #[form(skip)]
    code: String,
}

fn main() {}
