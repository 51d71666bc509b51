//! Firewall policy assembly.
//!
//! Builds the edge web ACL as a fold over an ordered list of candidate rule
//! producers: the geo allow rule (if configured), the ip allow rule (if
//! configured), then the six managed rule groups. Each candidate contributes
//! zero or one rule, and a rule's priority is its position among the rules
//! actually included, so priorities are always contiguous from 0.

use edgestack_model::value::{Attribute, LogicalId, TemplateValue};
use edgestack_model::waf::{
    DefaultAction, FirewallRule, IpAddressVersion, IpSet, ManagedRuleGroup, RuleAction,
    RuleStatement, VisibilityConfig, WafScope, WebAcl,
};
use tracing::debug;

use crate::config::{SiteConfig, WafAllowLists};

/// Metric name of the ACL itself.
const ACL_METRIC_NAME: &str = "waf-cloudfront";

/// A rule before its priority is assigned.
type RuleSeed = (String, RuleStatement, RuleAction);

/// Build the IP allow-set, or `None` when no ip allow-list is configured.
pub(crate) fn build_ip_set(config: &SiteConfig) -> Option<IpSet> {
    let addresses = config.waf_allow_lists.as_ref()?.ip()?;
    Some(IpSet {
        name: config.scoped_name("ipset-cloudfront"),
        description: format!(
            "IP addresses to allow for {} {}",
            config.resource_prefix, config.envname
        ),
        addresses: addresses.to_vec(),
        ip_address_version: IpAddressVersion::V4,
        scope: WafScope::Cloudfront,
    })
}

/// Assemble the web ACL guarding both distributions.
///
/// `ip_set` is the logical id of the IP allow-set when one was declared; its
/// presence is what enables the ip rule.
pub(crate) fn assemble_web_acl(config: &SiteConfig, ip_set: Option<&LogicalId>) -> WebAcl {
    let allow = config.waf_allow_lists.as_ref();

    let geo_rule: Option<RuleSeed> = allow.and_then(WafAllowLists::geo).map(|codes| {
        (
            "GeoMatch".to_owned(),
            RuleStatement::GeoNotMatch {
                country_codes: codes.to_vec(),
            },
            RuleAction::Block,
        )
    });

    let ip_rule: Option<RuleSeed> = ip_set.map(|id| {
        (
            "IPMatch".to_owned(),
            RuleStatement::IpSetNotReference {
                ip_set_arn: TemplateValue::attr(id.clone(), Attribute::Arn),
            },
            RuleAction::Block,
        )
    });

    let managed_rules = ManagedRuleGroup::ALL.iter().map(|group| {
        Some((
            group.rule_name(),
            RuleStatement::ManagedRuleGroup {
                vendor_name: "AWS".to_owned(),
                name: group.group_name().to_owned(),
            },
            RuleAction::DelegateToManaged,
        ))
    });

    let included = [geo_rule, ip_rule]
        .into_iter()
        .chain(managed_rules)
        .flatten();

    let rules: Vec<FirewallRule> = (0u32..)
        .zip(included)
        .map(|(priority, (name, statement, action))| FirewallRule {
            visibility_config: VisibilityConfig::named(&name),
            name,
            priority,
            statement,
            action,
        })
        .collect();

    debug!(rules = rules.len(), "assembled web acl");

    WebAcl {
        default_action: DefaultAction::Allow,
        scope: WafScope::Cloudfront,
        visibility_config: VisibilityConfig::named(ACL_METRIC_NAME),
        rules,
    }
}
