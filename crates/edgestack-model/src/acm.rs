//! TLS certificate shapes.

use serde::{Deserialize, Serialize};

/// A TLS certificate for a distribution's custom domains.
///
/// Either a pre-existing certificate referenced by ARN, or a new one
/// requested and validated through DNS records in the hosted zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CertificateSpec {
    /// Reference an existing certificate.
    #[serde(rename_all = "camelCase")]
    Imported {
        /// ARN of the existing certificate.
        certificate_arn: String,
    },
    /// Request a certificate validated via DNS against the hosted zone.
    #[serde(rename_all = "camelCase")]
    DnsValidated {
        /// Primary domain name.
        domain_name: String,
        /// Additional covered names.
        subject_alternative_names: Vec<String>,
        /// Zone id the validation records are written to.
        hosted_zone_id: String,
    },
}
