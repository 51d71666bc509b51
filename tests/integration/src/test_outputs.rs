//! Parameter-store entries and cross-stack exports.

#[cfg(test)]
mod tests {
    use edgestack_core::{AccountId, SiteConfig, build_plan};
    use edgestack_model::value::{Attribute, TemplateValue};

    use crate::{auth_outputs, base_config, init_tracing, string_parameters};

    fn prod_config() -> SiteConfig {
        init_tracing();
        SiteConfig::builder()
            .envname("prod".to_owned())
            .account_id(AccountId::new("123456789012").expect("valid account"))
            .auth_at_edge(auth_outputs())
            .build()
    }

    #[test]
    fn test_should_emit_both_parameter_triplets() {
        let plan = build_plan(&prod_config()).expect("plan");
        let mut names: Vec<&str> = string_parameters(&plan)
            .iter()
            .map(|p| p.parameter_name.as_str())
            .collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "/edgestack/prod/CloudfrontDistributionBucket",
                "/edgestack/prod/CloudfrontDistributionDomainName",
                "/edgestack/prod/CloudfrontDistributionId",
                "/edgestack/prod/cloudfront/docs/user/CloudfrontDistributionBucket",
                "/edgestack/prod/cloudfront/docs/user/CloudfrontDistributionDomainName",
                "/edgestack/prod/cloudfront/docs/user/CloudfrontDistributionId",
            ]
        );
    }

    #[test]
    fn test_should_point_parameters_at_site_resources() {
        let plan = build_plan(&prod_config()).expect("plan");
        let parameters = string_parameters(&plan);

        let find = |name: &str| {
            parameters
                .iter()
                .find(|p| p.parameter_name == name)
                .unwrap_or_else(|| panic!("parameter {name} missing"))
        };

        assert_eq!(
            find("/edgestack/prod/CloudfrontDistributionId").string_value,
            TemplateValue::attr(plan.frontend.distribution.clone(), Attribute::Id)
        );
        assert_eq!(
            find("/edgestack/prod/CloudfrontDistributionDomainName").string_value,
            TemplateValue::attr(plan.frontend.distribution.clone(), Attribute::DomainName)
        );
        assert_eq!(
            find("/edgestack/prod/CloudfrontDistributionBucket").string_value,
            TemplateValue::attr(plan.frontend.bucket.clone(), Attribute::Name)
        );
        assert_eq!(
            find("/edgestack/prod/cloudfront/docs/user/CloudfrontDistributionId").string_value,
            TemplateValue::attr(plan.userguide.distribution.clone(), Attribute::Id)
        );
        assert_eq!(
            find("/edgestack/prod/cloudfront/docs/user/CloudfrontDistributionBucket").string_value,
            TemplateValue::attr(plan.userguide.bucket.clone(), Attribute::Name)
        );
    }

    #[test]
    fn test_should_export_frontend_triplet_with_env_suffix() {
        let plan = build_plan(&prod_config()).expect("plan");
        let outputs = &plan.template.outputs;
        assert_eq!(outputs.len(), 3);

        let names: Vec<&str> = outputs.iter().map(|o| o.export_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "OutputCfnFrontDistributionprod",
                "OutputCfnFrontDistributionDomainNameprod",
                "OutputCfnFrontDistributionBucketprod",
            ]
        );

        assert_eq!(
            outputs[0].value,
            TemplateValue::attr(plan.frontend.distribution.clone(), Attribute::Id)
        );
        assert_eq!(
            outputs[1].value,
            TemplateValue::attr(plan.frontend.distribution.clone(), Attribute::DomainName)
        );
        assert_eq!(
            outputs[2].value,
            TemplateValue::attr(plan.frontend.bucket.clone(), Attribute::Name)
        );
    }

    #[test]
    fn test_should_scope_parameters_by_environment() {
        let plan = build_plan(&base_config()).expect("plan");
        assert!(
            string_parameters(&plan)
                .iter()
                .all(|p| p.parameter_name.starts_with("/edgestack/dev/"))
        );
    }
}
