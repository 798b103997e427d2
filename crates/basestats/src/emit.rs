//! Go source emission.
//!
//! Renders a [`ClassStats`] aggregate into the simulator's
//! `base_stats_auto_gen.go`: rating constants first, then two maps keyed by
//! class and reference level. Every lookup happens before rendering starts,
//! so a missing key never yields a partial file.
//!
//! Output is deterministic: classes in declaration order (sentinel first),
//! levels ascending.

use crate::class::{Class, REFERENCE_LEVELS};
use crate::config::EmitConfig;
use crate::error::Result;
use crate::loaders::ClassStats;

/// Identifier of the sentinel class that has no data column.
const UNKNOWN_CLASS: &str = "proto.Class_ClassUnknown";

/// Render a raw fraction as a percentage with exactly four decimals.
///
/// Uses the exact binary value of `raw * 100`; exact ties round half to even.
/// Negative zero is written as `0.0000`.
pub fn format_percent(raw: f64) -> String {
    format!("{:.4}", raw * 100.0 + 0.0)
}

/// Shortest decimal literal that round-trips `value`.
fn format_scalar(value: f64) -> String {
    format!("{value}")
}

/// Rating conversion constants read from the combat ratings table at the level cap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingConstants {
    pub expertise_per_quarter_percent: f64,
    pub haste_per_percent: f64,
    pub defense_per_defense: f64,
    pub dodge_per_percent: f64,
    pub parry_per_percent: f64,
    pub block_per_percent: f64,
    pub resilience_per_crit_reduction: f64,
}

impl RatingConstants {
    pub fn from_stats(stats: &ClassStats) -> Result<Self> {
        Ok(Self {
            expertise_per_quarter_percent: stats.combat_rating("weapon skill")?,
            haste_per_percent: stats.combat_rating("haste melee")?,
            defense_per_defense: stats.combat_rating("defense skill")?,
            dodge_per_percent: stats.combat_rating("dodge")?,
            parry_per_percent: stats.combat_rating("parry")?,
            block_per_percent: stats.combat_rating("block")?,
            resilience_per_crit_reduction: stats.combat_rating("crit taken melee")?,
        })
    }
}

/// Per-level values of one class, in [`REFERENCE_LEVELS`] order.
struct ClassRow<T> {
    ident: String,
    levels: [T; REFERENCE_LEVELS.len()],
}

#[derive(Clone, Copy)]
struct BaseCrit {
    spell: f64,
    melee: f64,
}

/// Renders the generated Go file.
#[derive(Clone, Debug, Default)]
pub struct GoEmitter {
    config: EmitConfig,
}

impl GoEmitter {
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, stats: &ClassStats) -> Result<String> {
        let ratings = RatingConstants::from_stats(stats)?;
        let crit_per_agi = crit_per_agi_rows(stats)?;
        let base_crit = base_crit_rows(stats)?;

        let mut output = self.header();
        output.push_str(&render_constants(&ratings));
        output.push('\n');
        output.push_str(&render_crit_per_agi(&crit_per_agi));
        output.push('\n');
        output.push_str(&render_extra_base_stats(&base_crit));
        Ok(output)
    }

    fn header(&self) -> String {
        let banner = format!(
            "// AUTO GENERATED BY {}. DO NOT EDIT.",
            self.config.generator
        );
        let rule = format!("// {}", "*".repeat(banner.len().saturating_sub(3)));

        let mut output = format!("package {}\n\n", self.config.package);
        output.push_str(&format!("{rule}\n{banner}\n{rule}\n\n"));
        output.push_str("import (\n");
        output.push_str(&format!("\t\"{}\"\n", self.config.proto_import));
        output.push_str(&format!("\t\"{}\"\n", self.config.stats_import));
        output.push_str(")\n\n");
        output
    }
}

fn crit_per_agi_rows(stats: &ClassStats) -> Result<Vec<ClassRow<f64>>> {
    let mut rows = vec![ClassRow {
        ident: UNKNOWN_CLASS.to_string(),
        levels: [0.0; REFERENCE_LEVELS.len()],
    }];
    for class in Class::emitted() {
        let mut levels = [0.0; REFERENCE_LEVELS.len()];
        for (slot, level) in levels.iter_mut().zip(REFERENCE_LEVELS) {
            *slot = stats.melee_crit(class, level)?;
        }
        rows.push(ClassRow {
            ident: class.go_ident(),
            levels,
        });
    }
    Ok(rows)
}

fn base_crit_rows(stats: &ClassStats) -> Result<Vec<ClassRow<BaseCrit>>> {
    let zero = BaseCrit {
        spell: 0.0,
        melee: 0.0,
    };
    let mut rows = vec![ClassRow {
        ident: UNKNOWN_CLASS.to_string(),
        levels: [zero; REFERENCE_LEVELS.len()],
    }];
    for class in Class::emitted() {
        // One baseline row applies to every reference level.
        let base = BaseCrit {
            spell: stats.spell_crit_base(class)?,
            melee: stats.melee_crit_base(class)?,
        };
        rows.push(ClassRow {
            ident: class.go_ident(),
            levels: [base; REFERENCE_LEVELS.len()],
        });
    }
    Ok(rows)
}

fn push_const(output: &mut String, name: &str, value: &str) {
    output.push_str(&format!("const {name} = {value}\n"));
}

fn render_constants(ratings: &RatingConstants) -> String {
    let mut output = String::new();
    push_const(
        &mut output,
        "ExpertisePerQuarterPercentReduction",
        &format_scalar(ratings.expertise_per_quarter_percent),
    );
    push_const(
        &mut output,
        "HasteRatingPerHastePercent",
        &format_scalar(ratings.haste_per_percent),
    );

    output.push_str("\n// Crit/Hit ratings are straight percentage values in classic\n");
    for name in [
        "CritRatingPerCritChance",
        "SpellCritRatingPerCritChance",
        "MeleeHitRatingPerHitChance",
        "SpellHitRatingPerHitChance",
    ] {
        push_const(&mut output, name, "1");
    }
    output.push('\n');

    for (name, value) in [
        ("DefenseRatingPerDefense", ratings.defense_per_defense),
        ("DodgeRatingPerDodgeChance", ratings.dodge_per_percent),
        ("ParryRatingPerParryChance", ratings.parry_per_percent),
        ("BlockRatingPerBlockChance", ratings.block_per_percent),
        (
            "ResilienceRatingPerCritReductionChance",
            ratings.resilience_per_crit_reduction,
        ),
    ] {
        push_const(&mut output, name, &format_scalar(value));
    }
    output
}

fn render_crit_per_agi(rows: &[ClassRow<f64>]) -> String {
    let mut output = String::from("var CritPerAgiAtLevel = map[proto.Class]map[int]float64{\n");
    for row in rows {
        let levels: Vec<String> = REFERENCE_LEVELS
            .iter()
            .zip(&row.levels)
            .map(|(level, raw)| format!("{level}: {}", format_percent(*raw)))
            .collect();
        output.push_str(&format!("\t{}: {{{}}},\n", row.ident, levels.join(", ")));
    }
    output.push_str("}\n");
    output
}

fn render_extra_base_stats(rows: &[ClassRow<BaseCrit>]) -> String {
    let mut output =
        String::from("var ExtraClassBaseStats = map[proto.Class]map[int]stats.Stats{\n");
    for row in rows {
        output.push_str(&format!("\t{}: {{\n", row.ident));
        for (level, crit) in REFERENCE_LEVELS.iter().zip(&row.levels) {
            output.push_str(&format!("\t\t{level}: {{\n"));
            output.push_str(&format!(
                "\t\t\tstats.SpellCrit: {} * CritRatingPerCritChance,\n",
                format_percent(crit.spell)
            ));
            output.push_str(&format!(
                "\t\t\tstats.MeleeCrit: {} * CritRatingPerCritChance,\n",
                format_percent(crit.melee)
            ));
            output.push_str("\t\t},\n");
        }
        output.push_str("\t},\n");
    }
    output.push_str("}\n");
    output
}
