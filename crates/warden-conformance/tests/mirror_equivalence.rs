//! The mirror must agree with the primary pipeline on well-formed inputs.
//! These sweeps are exhaustive over the closed enums, so agreement here is
//! agreement everywhere.

use warden_boundary::{check_crossing, validate_action};
use warden_capability::govern_action;
use warden_conformance::{ACTIONS, ACTORS, STATES, ZONES};
use warden_dispatch::{handshake, normalize_response, step_loop};
use warden_evidence::{capture, validate_chain};
use warden_knowledge::lookup_bug_type;
use warden_mirror as mirror;
use warden_triage::{
    assess_eligibility, assign_confidence, classify_bundle, handoff_readiness, human_presence,
    replay_readiness,
};
use warden_types::{
    ActionRequest, BrowserAction, Confidence, DecisionContext, Digest, EvidenceBundle,
    EvidenceChain, EvidenceState, EvidenceType, ExecutorIdentity, ExecutorRawResponse, LoopState,
    LoopTransition, ObservationPoint, ReadinessDecision, ReportedStatus, Severity, TargetClass,
    Timestamp, ValidationResult, WorkflowContext, WorkflowTransition,
};
use warden_workflow::{advance, aggregate};

fn ts(s: &str) -> Timestamp {
    Timestamp::parse(s).unwrap()
}

#[test]
fn crossing_decisions_agree() {
    for from in ZONES {
        for to in ZONES {
            let primary = check_crossing(from, to);
            let shadow = mirror::recheck_crossing(from, to);
            assert_eq!(primary.allowed, shadow.allowed, "{from} -> {to}");
        }
    }
}

#[test]
fn action_verdicts_agree() {
    for actor in ACTORS {
        for action in ACTIONS {
            for zone in ZONES {
                let request = ActionRequest::new(actor, action, zone, "sweep");
                let primary = validate_action(&request);
                let shadow = mirror::recheck_action(&request);
                assert_eq!(
                    primary.result, shadow.result,
                    "{actor:?} {action:?} {zone:?}"
                );
            }
        }
    }
}

#[test]
fn workflow_transitions_agree() {
    const TRANSITIONS: [WorkflowTransition; 6] = [
        WorkflowTransition::Validate,
        WorkflowTransition::Approve,
        WorkflowTransition::Reject,
        WorkflowTransition::Complete,
        WorkflowTransition::Abort,
        WorkflowTransition::Escalate,
    ];
    for state in STATES {
        for transition in TRANSITIONS {
            for actor in ACTORS {
                let primary = advance(&WorkflowContext { state, actor }, transition);
                let shadow = mirror::retransition(state, transition, actor);
                match (primary, shadow) {
                    (Ok(next), mirror::MirrorTransition::Advances(to)) => {
                        assert_eq!(next.state, to, "{state:?} {transition:?} {actor:?}")
                    }
                    (Err(_), mirror::MirrorTransition::Refused) => {}
                    (p, s) => panic!("divergence at {state:?} {transition:?} {actor:?}: {p:?} vs {s:?}"),
                }
            }
        }
    }
}

#[test]
fn aggregation_agrees() {
    const VALIDATIONS: [ValidationResult; 3] = [
        ValidationResult::Allow,
        ValidationResult::Deny,
        ValidationResult::Escalate,
    ];
    for validation in VALIDATIONS {
        for state in STATES {
            for transition_allowed in [true, false] {
                for actor in ACTORS {
                    for zone in ZONES {
                        let ctx = DecisionContext {
                            validation,
                            state,
                            transition_allowed,
                            actor,
                            zone,
                        };
                        assert_eq!(
                            aggregate(&ctx).decision,
                            mirror::reaggregate(&ctx),
                            "{ctx:?}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn eligibility_agrees() {
    const SEVERITIES: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];
    const TARGETS: [TargetClass; 3] = [
        TargetClass::Development,
        TargetClass::Staging,
        TargetClass::Production,
    ];
    for in_scope in [true, false] {
        for duplicate in [true, false] {
            for severity in SEVERITIES {
                for target in TARGETS {
                    assert_eq!(
                        assess_eligibility(in_scope, duplicate, severity, target).decision,
                        mirror::reassess_eligibility(in_scope, duplicate, severity, target),
                    );
                }
            }
        }
    }
}

#[test]
fn bundle_classification_and_confidence_agree() {
    let bundles = [
        EvidenceBundle::builder().build(),
        EvidenceBundle::builder().source("a", "fp").step("s").deterministic(true).build(),
        EvidenceBundle::builder().source("a", "fp").source("b", "fp").build(),
        EvidenceBundle::builder().source("a", "fp").source("b", "other").build(),
        EvidenceBundle::builder()
            .source("a", "fp")
            .source("b", "fp")
            .step("s")
            .deterministic(true)
            .external_dependencies(true)
            .build(),
    ];
    for bundle in &bundles {
        let state = classify_bundle(bundle);
        assert_eq!(state, mirror::reclassify_bundle(bundle));
        let replay = replay_readiness(bundle);
        assert_eq!(replay.replayable, mirror::rereplay(bundle));
        assert_eq!(
            assign_confidence(state, replay.replayable).confidence,
            mirror::reassign_confidence(state, replay.replayable)
        );
    }
}

#[test]
fn confidence_table_agrees_over_the_whole_grid() {
    const EVIDENCE_STATES: [EvidenceState; 5] = [
        EvidenceState::Unverified,
        EvidenceState::Raw,
        EvidenceState::Consistent,
        EvidenceState::Inconsistent,
        EvidenceState::Replayable,
    ];
    for state in EVIDENCE_STATES {
        for replayable in [true, false] {
            assert_eq!(
                assign_confidence(state, replayable).confidence,
                mirror::reassign_confidence(state, replayable),
                "{state:?} {replayable}"
            );
        }
    }
}

#[test]
fn readiness_and_presence_agree() {
    const CONFIDENCES: [Confidence; 3] = [Confidence::Low, Confidence::Medium, Confidence::High];
    const EVIDENCE_STATES: [EvidenceState; 5] = [
        EvidenceState::Unverified,
        EvidenceState::Raw,
        EvidenceState::Consistent,
        EvidenceState::Inconsistent,
        EvidenceState::Replayable,
    ];
    const SEVERITIES: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];
    const TARGETS: [TargetClass; 3] = [
        TargetClass::Development,
        TargetClass::Staging,
        TargetClass::Production,
    ];
    const READINESS: [ReadinessDecision; 3] = [
        ReadinessDecision::ReadyForBrowser,
        ReadinessDecision::ReviewRequired,
        ReadinessDecision::NotReady,
    ];

    for confidence in CONFIDENCES {
        for state in EVIDENCE_STATES {
            for reviewed in [true, false] {
                assert_eq!(
                    handoff_readiness(confidence, state, reviewed),
                    mirror::recheck_readiness(confidence, state, reviewed),
                );
            }
        }
    }
    for readiness in READINESS {
        for severity in SEVERITIES {
            for target in TARGETS {
                assert_eq!(
                    human_presence(readiness, severity, target),
                    mirror::recheck_presence(readiness, severity, target),
                );
            }
        }
    }
}

#[test]
fn capability_governance_agrees() {
    const BROWSER_ACTIONS: [BrowserAction; 10] = [
        BrowserAction::Click,
        BrowserAction::Read,
        BrowserAction::Scroll,
        BrowserAction::Extract,
        BrowserAction::Screenshot,
        BrowserAction::Navigate,
        BrowserAction::FillInput,
        BrowserAction::SubmitForm,
        BrowserAction::FileUpload,
        BrowserAction::ScriptExecute,
    ];
    for action in BROWSER_ACTIONS {
        for state in STATES {
            for attempting in [true, false] {
                let primary = govern_action(action, state, attempting);
                let shadow = mirror::regovern_action(action, state, attempting);
                assert_eq!(primary.decision, shadow.decision, "{action:?} {state:?}");
                assert_eq!(primary.tier, shadow.tier, "{action:?}");
            }
        }
    }
}

#[test]
fn loop_machine_agrees() {
    const LOOP_STATES: [LoopState; 5] = [
        LoopState::Initialized,
        LoopState::Ready,
        LoopState::Dispatched,
        LoopState::AwaitingResponse,
        LoopState::Halted,
    ];
    const LOOP_TRANSITIONS: [LoopTransition; 4] = [
        LoopTransition::Init,
        LoopTransition::Dispatch,
        LoopTransition::Receive,
        LoopTransition::Halt,
    ];
    for state in LOOP_STATES {
        for transition in LOOP_TRANSITIONS {
            assert_eq!(
                step_loop(state, transition),
                mirror::restep_loop(state, transition),
                "{state:?} {transition:?}"
            );
        }
    }
}

#[test]
fn handshake_agrees() {
    const IDENTITIES: [Option<ExecutorIdentity>; 5] = [
        None,
        Some(ExecutorIdentity::Unknown),
        Some(ExecutorIdentity::Unverified),
        Some(ExecutorIdentity::Verified),
        Some(ExecutorIdentity::Revoked),
    ];
    let a = Digest::parse(&"ab".repeat(32)).unwrap();
    let b = Digest::parse(&"cd".repeat(32)).unwrap();
    for identity in IDENTITIES {
        for presented in [&a, &b] {
            assert_eq!(
                handshake(identity, &a, presented).accepted,
                mirror::rerun_handshake(identity, &a, presented),
                "{identity:?}"
            );
        }
    }
}

#[test]
fn normalization_agrees() {
    const REPORTED: [ReportedStatus; 5] = [
        ReportedStatus::Success,
        ReportedStatus::Failure,
        ReportedStatus::Timeout,
        ReportedStatus::Partial,
        ReportedStatus::Malformed,
    ];
    for reported in REPORTED {
        let response = ExecutorRawResponse {
            executor_id: "exec-1".into(),
            instruction_hash: Digest::zero(),
            payload: Vec::new(),
            reported,
        };
        let primary = normalize_response(&response);
        let (decision, confidence) = mirror::renormalize(reported);
        assert_eq!(primary.decision, decision, "{reported:?}");
        assert_eq!(primary.confidence, confidence, "{reported:?}");
    }
}

#[test]
fn chain_validation_agrees_on_intact_and_tampered_chains() {
    let mut chain = EvidenceChain::empty("sess-mirror");
    for (i, payload) in [b"alpha".as_slice(), b"beta", b"gamma"].iter().enumerate() {
        chain = capture(
            chain,
            ObservationPoint::PreEvaluate,
            EvidenceType::StateDelta,
            ts(&format!("2026-03-01T00:00:0{i}Z")),
            payload.to_vec(),
        );
    }

    assert!(validate_chain(&chain).is_ok());
    assert_eq!(mirror::revalidate_chain(&chain), mirror::MirrorChainVerdict::Intact);

    chain.records[2].payload = b"delta".to_vec();
    assert!(validate_chain(&chain).is_err());
    assert!(matches!(
        mirror::revalidate_chain(&chain),
        mirror::MirrorChainVerdict::Broken { .. }
    ));
}

#[test]
fn duplicate_detection_agrees() {
    let mut ledger = warden_triage::FingerprintLedger::new();
    let mut prior: Vec<String> = Vec::new();
    for fp in ["fp-1", "fp-2", "fp-1", "fp-3", "fp-2"] {
        let primary = ledger.check(fp).duplicate;
        let shadow = mirror::recheck_duplicate(&prior, fp);
        assert_eq!(primary, shadow, "{fp}");
        ledger.note(fp);
        if !prior.iter().any(|p| p == fp) {
            prior.push(fp.to_string());
        }
    }
}

#[test]
fn bug_lookup_agrees() {
    for token in [
        "cross_site_scripting",
        "sql_injection",
        "path_traversal",
        "business_logic_flaw",
        "not_a_bug_type",
        "",
        "SQL_INJECTION",
    ] {
        assert_eq!(lookup_bug_type(token), mirror::relookup_bug_type(token), "{token}");
    }
}
