//! Custom domain and certificate resolution.
//!
//! Decides whether the two distributions receive custom host names, a TLS
//! certificate, and TLS settings, or fall back to the CDN defaults. The
//! userguide host name is always `userguide.` + the zone apex.

use edgestack_model::acm::CertificateSpec;
use edgestack_model::cloudfront::{SecurityPolicyProtocol, SslSupportMethod};
use edgestack_model::route53::HostedZoneRef;

use crate::config::DomainConfig;

/// Host name prefix of the userguide site.
const USERGUIDE_SUBDOMAIN: &str = "userguide";

/// Everything domain-dependent the emitter needs, present only when a custom
/// domain is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DomainResolution {
    /// Frontend host name (the zone apex).
    pub frontend_domain: String,
    /// Userguide host name.
    pub userguide_domain: String,
    /// Zone DNS records and certificate validation go into.
    pub hosted_zone: HostedZoneRef,
    /// Certificate covering both host names.
    pub certificate: CertificateSpec,
    /// TLS serving method for both distributions.
    pub ssl_support_method: SslSupportMethod,
    /// Minimum TLS version for both distributions.
    pub minimum_protocol_version: SecurityPolicyProtocol,
}

/// Resolve the optional custom domain.
///
/// A config with an empty zone name counts as absent, matching how an unset
/// domain reaches the planner through partially-filled config files.
pub(crate) fn resolve(custom_domain: Option<&DomainConfig>) -> Option<DomainResolution> {
    let domain = custom_domain.filter(|d| !d.hosted_zone_name.is_empty())?;
    let apex = domain.hosted_zone_name.clone();

    let certificate = match &domain.certificate_arn {
        Some(arn) => CertificateSpec::Imported {
            certificate_arn: arn.clone(),
        },
        None => CertificateSpec::DnsValidated {
            domain_name: apex.clone(),
            subject_alternative_names: vec![format!("*.{apex}")],
            hosted_zone_id: domain.hosted_zone_id.clone(),
        },
    };

    Some(DomainResolution {
        userguide_domain: format!("{USERGUIDE_SUBDOMAIN}.{apex}"),
        frontend_domain: apex.clone(),
        hosted_zone: HostedZoneRef {
            hosted_zone_id: domain.hosted_zone_id.clone(),
            zone_name: apex,
        },
        certificate,
        ssl_support_method: SslSupportMethod::Sni,
        minimum_protocol_version: SecurityPolicyProtocol::TlsV12_2021,
    })
}
