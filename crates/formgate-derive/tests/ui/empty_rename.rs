use formgate_derive::Form;

#[allow(dead_code)]
#[derive(Form)]
struct Invitation {
    #[form(rename = "")]
    code: String,
}

fn main() {}
