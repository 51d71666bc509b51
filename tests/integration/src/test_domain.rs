//! Custom domain, certificate, and DNS wiring.

#[cfg(test)]
mod tests {
    use edgestack_core::build_plan;
    use edgestack_model::acm::CertificateSpec;
    use edgestack_model::cloudfront::{SecurityPolicyProtocol, SslSupportMethod};
    use edgestack_model::template::Resource;

    use crate::{alias_records, base_config, config_with_domain, distribution};

    #[test]
    fn test_should_fall_back_to_default_domains() {
        let plan = build_plan(&base_config()).expect("plan");
        for site in [&plan.frontend, &plan.userguide] {
            let spec = distribution(&plan, site);
            assert!(spec.domain_names.is_none());
            assert!(spec.certificate.is_none());
            assert!(spec.ssl_support_method.is_none());
            assert!(spec.minimum_protocol_version.is_none());
        }
        assert!(alias_records(&plan).is_empty());
        assert!(
            !plan
                .template
                .resources
                .values()
                .any(|r| matches!(r, Resource::Certificate(_)))
        );
    }

    #[test]
    fn test_should_derive_userguide_host_from_apex() {
        let plan = build_plan(&config_with_domain(None)).expect("plan");
        let frontend = distribution(&plan, &plan.frontend);
        let userguide = distribution(&plan, &plan.userguide);
        assert_eq!(
            frontend.domain_names,
            Some(vec!["data.example.com".to_owned()])
        );
        assert_eq!(
            userguide.domain_names,
            Some(vec!["userguide.data.example.com".to_owned()])
        );
    }

    #[test]
    fn test_should_alias_each_host_to_its_distribution() {
        let plan = build_plan(&config_with_domain(None)).expect("plan");
        let records = alias_records(&plan);
        assert_eq!(records.len(), 2);

        let frontend = records
            .iter()
            .find(|r| r.record_name == "data.example.com")
            .expect("frontend record");
        assert_eq!(frontend.target_distribution, plan.frontend.distribution);

        let userguide = records
            .iter()
            .find(|r| r.record_name == "userguide.data.example.com")
            .expect("userguide record");
        assert_eq!(userguide.target_distribution, plan.userguide.distribution);

        for record in &records {
            assert_eq!(record.zone.hosted_zone_id, "Z0123456789ABC");
            assert_eq!(record.zone.zone_name, "data.example.com");
        }
    }

    #[test]
    fn test_should_pin_sni_and_tls12_on_both_distributions() {
        let plan = build_plan(&config_with_domain(None)).expect("plan");
        for site in [&plan.frontend, &plan.userguide] {
            let spec = distribution(&plan, site);
            assert_eq!(spec.ssl_support_method, Some(SslSupportMethod::Sni));
            assert_eq!(
                spec.minimum_protocol_version,
                Some(SecurityPolicyProtocol::TlsV12_2021)
            );
        }
    }

    #[test]
    fn test_should_request_wildcard_certificate_by_default() {
        let plan = build_plan(&config_with_domain(None)).expect("plan");
        let cert = plan
            .template
            .resources
            .values()
            .find_map(|r| match r {
                Resource::Certificate(cert) => Some(cert),
                _ => None,
            })
            .expect("certificate declared");
        let CertificateSpec::DnsValidated {
            domain_name,
            subject_alternative_names,
            hosted_zone_id,
        } = cert
        else {
            panic!("expected dns-validated certificate");
        };
        assert_eq!(domain_name, "data.example.com");
        assert_eq!(
            subject_alternative_names,
            &vec!["*.data.example.com".to_owned()]
        );
        assert_eq!(hosted_zone_id, "Z0123456789ABC");
    }

    #[test]
    fn test_should_import_existing_certificate_when_arn_given() {
        let arn = "arn:aws:acm:us-east-1:123456789012:certificate/abcd-1234";
        let plan = build_plan(&config_with_domain(Some(arn))).expect("plan");
        let cert = plan
            .template
            .resources
            .values()
            .find_map(|r| match r {
                Resource::Certificate(cert) => Some(cert),
                _ => None,
            })
            .expect("certificate declared");
        assert_eq!(
            cert,
            &CertificateSpec::Imported {
                certificate_arn: arn.to_owned()
            }
        );
    }

    #[test]
    fn test_should_share_one_certificate_between_distributions() {
        let plan = build_plan(&config_with_domain(None)).expect("plan");
        let frontend = distribution(&plan, &plan.frontend);
        let userguide = distribution(&plan, &plan.userguide);
        assert!(frontend.certificate.is_some());
        assert_eq!(frontend.certificate, userguide.certificate);
    }
}
