//! Claim classification rules
//!
//! Each rule is a pure detector over one segment. Rules run in order and a
//! later rule's type overrides an earlier one's, so the rule order encodes
//! precedence: Attribution over Statistical over the Factual default.
//! A segment is claim-worthy if any rule fires.

use factdesk_domain::{ClaimType, Priority, UNATTRIBUTED_SOURCE};
use regex::Regex;
use std::sync::LazyLock;

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+(?:%|\s(?:percent|dollars|million|billion))?").unwrap()
});

static QUOTATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""[^"]*""#).unwrap());

/// Title-Case name followed by a reporting verb
static ATTRIBUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([A-Z][a-z]+(?:\s[A-Z][a-z]+)*)\s(?:said|stated|claimed|reported|announced|according to)",
    )
    .unwrap()
});

/// What a rule contributes when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal<'t> {
    /// Set the claim type, and the priority if given
    Kind {
        /// Type to assign
        claim_type: ClaimType,
        /// Priority to assign, if the rule has an opinion
        priority: Option<Priority>,
    },
    /// The segment attributes its content to a named party
    Attributed(&'t str),
}

/// A named, independent detector
#[derive(Clone, Copy)]
pub struct ClassifierRule {
    /// Rule name, for logging
    pub name: &'static str,
    detect: for<'t> fn(&'t str) -> Option<Signal<'t>>,
}

impl ClassifierRule {
    /// Run the detector against one segment
    pub fn detect<'t>(&self, segment: &'t str) -> Option<Signal<'t>> {
        (self.detect)(segment)
    }
}

impl std::fmt::Debug for ClassifierRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierRule").field("name", &self.name).finish()
    }
}

fn detect_numeric(segment: &str) -> Option<Signal<'_>> {
    NUMERIC.is_match(segment).then_some(Signal::Kind {
        claim_type: ClaimType::Statistical,
        priority: Some(Priority::High),
    })
}

fn detect_quotation(segment: &str) -> Option<Signal<'_>> {
    QUOTATION.is_match(segment).then_some(Signal::Kind {
        claim_type: ClaimType::Attribution,
        priority: None,
    })
}

fn detect_attribution(segment: &str) -> Option<Signal<'_>> {
    ATTRIBUTION
        .captures(segment)
        .and_then(|caps| caps.get(1))
        .map(|name| Signal::Attributed(name.as_str()))
}

/// The classifier rules in precedence order (lowest first)
pub const RULES: &[ClassifierRule] = &[
    ClassifierRule {
        name: "numeric",
        detect: detect_numeric,
    },
    ClassifierRule {
        name: "quotation",
        detect: detect_quotation,
    },
    ClassifierRule {
        name: "attribution_phrase",
        detect: detect_attribution,
    },
];

/// Result of classifying a claim-worthy segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'t> {
    /// Assigned claim type
    pub claim_type: ClaimType,
    /// Assigned priority
    pub priority: Priority,
    /// Name captured by the attribution phrase, if any
    pub attributed_to: Option<&'t str>,
}

impl Default for Classification<'_> {
    fn default() -> Self {
        Self {
            claim_type: ClaimType::Factual,
            priority: Priority::Medium,
            attributed_to: None,
        }
    }
}

impl<'t> Classification<'t> {
    /// Source label for the claim: the attributed name, or the placeholder
    pub fn source_label(&self) -> &'t str {
        self.attributed_to.unwrap_or(UNATTRIBUTED_SOURCE)
    }

    fn apply(&mut self, signal: Signal<'t>) {
        match signal {
            Signal::Kind {
                claim_type,
                priority,
            } => {
                self.claim_type = claim_type;
                if let Some(priority) = priority {
                    self.priority = priority;
                }
            }
            Signal::Attributed(name) => self.attributed_to = Some(name),
        }
    }
}

/// Classify a segment, or `None` if no rule fires
pub fn classify(segment: &str) -> Option<Classification<'_>> {
    let mut classification = Classification::default();
    let mut fired = false;

    for rule in RULES {
        if let Some(signal) = rule.detect(segment) {
            tracing::trace!(rule = rule.name, "Rule fired");
            classification.apply(signal);
            fired = true;
        }
    }

    fired.then_some(classification)
}
