use tracing::debug;

use warden_evidence::CanonicalWriter;
use warden_types::{
    BrowserAction, Digest, GovernanceError, InstructionEnvelope, InstructionEnvelopeBuilder,
};

fn command_token(command: BrowserAction) -> &'static str {
    match command {
        BrowserAction::Click => "click",
        BrowserAction::Read => "read",
        BrowserAction::Scroll => "scroll",
        BrowserAction::Extract => "extract",
        BrowserAction::Screenshot => "screenshot",
        BrowserAction::Navigate => "navigate",
        BrowserAction::FillInput => "fill_input",
        BrowserAction::SubmitForm => "submit_form",
        BrowserAction::FileUpload => "file_upload",
        BrowserAction::ScriptExecute => "script_execute",
    }
}

fn envelope_digest(
    instruction_id: &str,
    executor_id: &str,
    command: BrowserAction,
    target: &str,
    timeout_ms: u64,
) -> Digest {
    let hex = CanonicalWriter::new()
        .str_field(instruction_id)
        .str_field(executor_id)
        .str_field(command_token(command))
        .str_field(target)
        .u64_field(timeout_ms)
        .digest_hex();
    Digest::from_computed(hex)
}

/// Seal an envelope: compute the hash over every field and freeze it.
pub fn seal_envelope(
    builder: InstructionEnvelopeBuilder,
) -> Result<InstructionEnvelope, GovernanceError> {
    let (instruction_id, executor_id, command, target, timeout_ms) = builder.parts()?;
    let envelope_hash =
        envelope_digest(&instruction_id, &executor_id, command, &target, timeout_ms);
    debug!(instruction = %instruction_id, executor = %executor_id, "envelope sealed");
    Ok(InstructionEnvelope {
        instruction_id,
        executor_id,
        command,
        target,
        timeout_ms,
        envelope_hash,
    })
}

/// Re-hash an envelope and compare against its seal.
pub fn verify_envelope(envelope: &InstructionEnvelope) -> Result<(), GovernanceError> {
    let recomputed = envelope_digest(
        &envelope.instruction_id,
        &envelope.executor_id,
        envelope.command,
        &envelope.target,
        envelope.timeout_ms,
    );
    if recomputed != envelope.envelope_hash {
        return Err(GovernanceError::HashMismatch {
            expected: envelope.envelope_hash.as_str().to_string(),
            actual: recomputed.as_str().to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sealed() -> InstructionEnvelope {
        seal_envelope(
            InstructionEnvelope::builder()
                .instruction_id("ins-1")
                .executor_id("exec-1")
                .command(BrowserAction::Navigate)
                .target("https://example.test/login")
                .timeout_ms(10_000),
        )
        .unwrap()
    }

    #[test]
    fn sealed_envelope_verifies() {
        assert!(verify_envelope(&sealed()).is_ok());
    }

    #[test]
    fn any_altered_field_breaks_the_seal() {
        let mut e = sealed();
        e.target = "https://evil.test".into();
        assert!(verify_envelope(&e).is_err());

        let mut e = sealed();
        e.timeout_ms += 1;
        assert!(verify_envelope(&e).is_err());

        let mut e = sealed();
        e.command = BrowserAction::SubmitForm;
        assert!(verify_envelope(&e).is_err());
    }

    #[test]
    fn sealing_is_deterministic() {
        assert_eq!(sealed().envelope_hash, sealed().envelope_hash);
    }
}
