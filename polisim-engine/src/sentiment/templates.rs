//! Declarative reaction templates.
//!
//! Synthetic public reactions are content, not control flow: one template
//! list per `(policy category, shock direction)`, resolved by placeholder
//! substitution in declaration order. Extending the table never touches
//! the aggregation logic.

use crate::profiles::SensitivityProfile;
use crate::types::{PolicyInput, PolicyType};

/// Direction of the effective policy shock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagnitudeSign {
    Increase,
    Decrease,
    Flat,
}

impl MagnitudeSign {
    /// Classify an effective magnitude.
    pub fn of(effective_magnitude: f64) -> Self {
        if effective_magnitude > 0.0 {
            Self::Increase
        } else if effective_magnitude < 0.0 {
            Self::Decrease
        } else {
            Self::Flat
        }
    }
}

/// Reaction templates for a `(policy category, shock direction)` key.
///
/// Placeholders: `{magnitude}` (absolute announced magnitude),
/// `{duration}` (rollout months), `{sector}` (the profile's focus sector).
pub fn templates_for(policy_type: PolicyType, sign: MagnitudeSign) -> &'static [&'static str] {
    use MagnitudeSign::*;
    use PolicyType::*;

    match (policy_type, sign) {
        (FuelPriceChange, Increase) => &[
            "Fuel is about to get {magnitude}% costlier and my commute is already a burden.",
            "Another {magnitude}% at the pump will hurt transport workers and small hauliers the most.",
            "Families are struggling with fuel prices as it is, and now {duration} months of this?",
            "People are angry about fuel costs; expect protest if prices climb {magnitude}% more.",
            "Watching how the {sector} sector absorbs the new fuel prices over the next {duration} months.",
        ],
        (FuelPriceChange, Decrease) => &[
            "Cheaper commutes at last, a {magnitude}% cut in fuel prices is welcome news.",
            "Fuel getting {magnitude}% cheaper means real savings for delivery businesses.",
            "Lower pump prices should boost the {sector} sector within months.",
            "Some relief for households that spend so much of their income on fuel.",
            "Curious whether retailers pass the {magnitude}% fuel cut through to shelf prices.",
        ],
        (FuelPriceChange, Flat) => &[
            "A fuel price review with no net change announced for the next {duration} months.",
            "Pump prices stay where they are; the {sector} sector continues as before.",
            "No movement on fuel duty this cycle according to the ministry.",
            "Analysts see little change in logistics costs from this announcement.",
            "Fuel pricing policy rolls over unchanged for another {duration} months.",
        ],

        (TaxReform, Increase) => &[
            "A {magnitude}% tax rise will squeeze small manufacturers already on thin margins.",
            "Higher taxes now? Families are struggling to keep up as it is.",
            "Worried this reform makes hiring costlier for services firms.",
            "The new tax burden lands on the {sector} sector over {duration} months.",
            "Reading the fine print of the reform before judging who actually pays.",
        ],
        (TaxReform, Decrease) => &[
            "A {magnitude}% tax cut is welcome breathing room for employers.",
            "Lower taxes should boost investment in manufacturing and IT.",
            "Real relief for companies that deferred hiring through the downturn.",
            "Payroll savings from the reform could go straight into wages.",
            "Waiting to see how the cut is financed over the next {duration} months.",
        ],
        (TaxReform, Flat) => &[
            "A revenue-neutral reform; rates move around but the total stays put.",
            "The {sector} sector sees no net change in its tax bill this year.",
            "Mostly an administrative reshuffle of the tax code by the look of it.",
            "Accountants will be busy for {duration} months; taxpayers may not notice.",
            "Waiting for the schedules before judging this reform either way.",
        ],

        (SubsidyChange, Increase) => &[
            "A {magnitude}% boost to subsidies is good news for family farms.",
            "Bigger subsidies mean relief for clinics running at a loss.",
            "Farmers welcome the increase after two hard seasons.",
            "Energy subsidies rising {magnitude}% should make bills easier to manage.",
            "Tracking whether the {sector} sector actually draws down the new money.",
        ],
        (SubsidyChange, Decrease) => &[
            "Cutting subsidies by {magnitude}% will hurt farmers before harvest.",
            "Clinics are worried about staying open without the subsidy line.",
            "Energy bills become a heavier burden once the subsidy lapses.",
            "Expect protest in rural districts if the cuts go through.",
            "Unclear which programmes are trimmed first under the {duration}-month plan.",
        ],
        (SubsidyChange, Flat) => &[
            "Subsidy envelopes roll over unchanged for the next {duration} months.",
            "No new money and no cuts; the {sector} sector budget stands still.",
            "The review reshuffles paperwork but leaves the amounts alone.",
            "Programme administrators expect business as usual this cycle.",
            "A quiet budget line this year by all accounts.",
        ],

        (MinimumWageChange, Increase) => &[
            "A {magnitude}% wage floor rise is welcome news for shop staff.",
            "Higher minimum pay means real relief for working families.",
            "Small restaurants fear layoffs once the new floor bites.",
            "Worried that services firms pass the wage rise straight into prices.",
            "Economists split on how the {sector} sector absorbs the increase.",
        ],
        (MinimumWageChange, Decrease) => &[
            "Cutting the wage floor by {magnitude}% will hurt the lowest earners.",
            "Families on minimum pay are already struggling; this makes it worse.",
            "Expect protest from unions across the {sector} sector.",
            "A heavier burden on households that have nothing left to trim.",
            "Watching whether any employer actually lowers posted wages.",
        ],
        (MinimumWageChange, Flat) => &[
            "The wage floor is frozen for {duration} months pending review.",
            "No change for minimum-pay workers this year.",
            "The commission deferred its decision on the {sector} sector rate.",
            "Payroll budgets stay as drafted across the board.",
            "An annual review that ended exactly where it started.",
        ],

        (EnvironmentalRegulation, Increase) => &[
            "Compliance costs will squeeze manufacturers for the next {duration} months.",
            "Plant operators are worried about the retrofit deadlines.",
            "Energy gets costlier while generators upgrade to the new standards.",
            "Cleaner air is welcome even if the transition is rough on the {sector} sector.",
            "Reading the standards to see which plants are actually in scope.",
        ],
        (EnvironmentalRegulation, Decrease) => &[
            "Rolling back the standards is a relief for smaller factories.",
            "Looser rules should boost output across heavy industry.",
            "Worried about air quality once enforcement winds down.",
            "Health groups protest the rollback of emission limits.",
            "Unclear how long the lighter regime stays in place.",
        ],
        (EnvironmentalRegulation, Flat) => &[
            "Existing standards are confirmed without tightening or rollback.",
            "The {sector} sector keeps operating under the rules it already knows.",
            "Inspection schedules continue unchanged for {duration} months.",
            "A holding pattern while the ministry studies new limits.",
            "Industry and regulators both call this one routine.",
        ],

        (ImportExportTariff, Increase) => &[
            "A {magnitude}% tariff makes imported components costlier overnight.",
            "Domestic manufacturers welcome the shield from cheap imports.",
            "IT firms are worried about retaliation in their export markets.",
            "Consumers carry the burden of tariffs in the end.",
            "Waiting for the customs schedule before estimating the real impact.",
        ],
        (ImportExportTariff, Decrease) => &[
            "Lower tariffs mean savings on imported machinery.",
            "A {magnitude}% cut is welcome news for exporters fearing retaliation.",
            "Cheaper inputs should boost manufacturing margins.",
            "Local producers are worried about competing with imports again.",
            "Trade volumes will show the effect within {duration} months.",
        ],
        (ImportExportTariff, Flat) => &[
            "Tariff lines roll over unchanged for the next {duration} months.",
            "Customs duties stay as published; traders plan as before.",
            "The review closed without touching the {sector} sector schedule.",
            "Importers expected movement and got the status quo.",
            "A trade policy cycle with nothing to report.",
        ],
    }
}

/// Fill a template's placeholders from the policy input.
pub fn render(template: &str, input: &PolicyInput, profile: &SensitivityProfile) -> String {
    template
        .replace("{magnitude}", &format!("{:.0}", input.magnitude.abs()))
        .replace("{duration}", &input.duration_months.to_string())
        .replace("{sector}", profile.focus_sector().name())
}
