//! Invitation code vs. customer ID: which fields are required depends on a toggle.
//!
//! Run with `RUST_LOG=formgate=trace` to see each validation pass.

use formgate::{rules, Form, FormState, FormValidator, FormgateConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default, PartialEq, Form)]
struct CustomerForm {
    has_invitation_code: bool,
    invitation_code: String,
    customer_id_head: String,
    customer_id_tail: String,
}

fn customer_validator() -> FormValidator<CustomerForm> {
    FormValidator::<CustomerForm>::new(|ctx| {
        if ctx.values().has_invitation_code {
            ctx.add(
                &CustomerForm::INVITATION_CODE,
                [
                    rules::required(),
                    rules::number(),
                    rules::length(12).message("Invitation codes are 12 digits."),
                ],
            );
        } else {
            ctx.add(
                &CustomerForm::CUSTOMER_ID_HEAD,
                [rules::required(), rules::number(), rules::length(4)],
            );
            ctx.add(
                &CustomerForm::CUSTOMER_ID_TAIL,
                [rules::required(), rules::number(), rules::length(8)],
            );
        }
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = FormgateConfig::load_default()?;
    let validator = customer_validator().with_behavior(config.behavior);

    let state = FormState::new(CustomerForm::default());
    let state = validator.change(&state, &CustomerForm::CUSTOMER_ID_HEAD, "12a".to_string());
    let state = validator.blur(&state, CustomerForm::CUSTOMER_ID_HEAD.name());
    println!("after blur: {}", serde_json::to_string(state.errors())?);

    let (passed, state) = validator.submit(&state);
    println!("submit passed={} errors={}", passed, serde_json::to_string(state.errors())?);

    let state = validator.change(&state, &CustomerForm::HAS_INVITATION_CODE, true);
    let state = validator.change(&state, &CustomerForm::INVITATION_CODE, "12345".to_string());
    println!("with invitation code: {}", serde_json::to_string(state.errors())?);

    let state = validator.change(&state, &CustomerForm::INVITATION_CODE, "123456789012".to_string());
    println!(
        "valid={} modified={}",
        state.is_all_valid(),
        state.is_modified()
    );

    Ok(())
}
