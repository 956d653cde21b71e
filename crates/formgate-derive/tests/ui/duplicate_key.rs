use formgate_derive::Form;

#[allow(dead_code)]
#[derive(Form)]
struct Invitation {
    code: String,
    #[form(rename = "code")]
    invitation: String,
}

fn main() {}
