use warden_types::{
    AuditRecord, AuditTrail, EvidenceChain, EvidenceRecord, EvidenceType, ObservationPoint,
    Timestamp,
};

/// Filter for querying an evidence chain. Read-only.
#[derive(Clone, Debug, Default)]
pub struct ChainFilter {
    pub point: Option<ObservationPoint>,
    pub evidence_type: Option<EvidenceType>,
    pub time_range: Option<(Timestamp, Timestamp)>,
}

impl ChainFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_point(mut self, point: ObservationPoint) -> Self {
        self.point = Some(point);
        self
    }

    pub fn with_evidence_type(mut self, evidence_type: EvidenceType) -> Self {
        self.evidence_type = Some(evidence_type);
        self
    }

    pub fn with_time_range(mut self, from: Timestamp, to: Timestamp) -> Self {
        self.time_range = Some((from, to));
        self
    }

    /// Check whether a record matches this filter.
    pub fn matches(&self, record: &EvidenceRecord) -> bool {
        if let Some(point) = self.point {
            if record.point != point {
                return false;
            }
        }
        if let Some(evidence_type) = self.evidence_type {
            if record.evidence_type != evidence_type {
                return false;
            }
        }
        if let Some((ref from, ref to)) = self.time_range {
            if record.timestamp < *from || record.timestamp > *to {
                return false;
            }
        }
        true
    }

    /// All records of a chain matching this filter, in chain order.
    pub fn query<'a>(&self, chain: &'a EvidenceChain) -> Vec<&'a EvidenceRecord> {
        chain.records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Filter for querying an audit trail. Read-only.
#[derive(Clone, Debug, Default)]
pub struct TrailFilter {
    pub layer: Option<String>,
    pub event: Option<String>,
    pub time_range: Option<(Timestamp, Timestamp)>,
}

impl TrailFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }

    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    pub fn with_time_range(mut self, from: Timestamp, to: Timestamp) -> Self {
        self.time_range = Some((from, to));
        self
    }

    pub fn matches(&self, record: &AuditRecord) -> bool {
        if let Some(ref layer) = self.layer {
            if &record.layer != layer {
                return false;
            }
        }
        if let Some(ref event) = self.event {
            if &record.event != event {
                return false;
            }
        }
        if let Some((ref from, ref to)) = self.time_range {
            if record.timestamp < *from || record.timestamp > *to {
                return false;
            }
        }
        true
    }

    /// All records of a trail matching this filter, in trail order.
    pub fn query<'a>(&self, trail: &'a AuditTrail) -> Vec<&'a AuditRecord> {
        trail.records.iter().filter(|r| self.matches(r)).collect()
    }
}
