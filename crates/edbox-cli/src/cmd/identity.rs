//! `edbox name`, `edbox color`, `edbox identify`: pseudonyms and colors for
//! a single anonymous id.
//!
//! Ids are taken verbatim from the command line: `42` and `042` are
//! different ids, exactly as they would be in the archive's JSON strings.

use crate::output::{OutputMode, pretty_kv, render_mode};
use clap::{Args, ValueEnum};
use edbox_core::identity::{self, ColorVariant, Identifier, TABLE_VERSION};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Anonymous participant id (e.g. the `anonymous_id` of a post).
    #[arg(allow_hyphen_values = true)]
    pub id: String,
}

#[derive(Args, Debug)]
pub struct ColorArgs {
    /// Anonymous participant id.
    #[arg(allow_hyphen_values = true)]
    pub id: String,

    /// Palette to read from.
    #[arg(long, value_enum, ignore_case = true, default_value_t = VariantArg::Primary)]
    pub variant: VariantArg,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum VariantArg {
    Primary,
    Secondary,
}

impl From<VariantArg> for ColorVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Primary => Self::Primary,
            VariantArg::Secondary => Self::Secondary,
        }
    }
}

#[derive(Debug, Serialize)]
struct NameOutput {
    id: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct ColorOutput {
    id: String,
    variant: ColorVariant,
    color: &'static str,
}

#[derive(Debug, Serialize)]
struct IdentifyOutput {
    id: String,
    name: String,
    primary_color: &'static str,
    secondary_color: &'static str,
    table_version: u32,
}

pub fn run_name(args: &IdArgs, output: OutputMode) -> anyhow::Result<()> {
    let id = Identifier::from(args.id.as_str());
    let result = NameOutput {
        id: args.id.clone(),
        name: identity::assign_name(&id),
    };

    render_mode(
        output,
        &result,
        |r, w| writeln!(w, "{}\t{}", r.id, r.name),
        |r, w| writeln!(w, "{}", r.name),
    )
}

pub fn run_color(args: &ColorArgs, output: OutputMode) -> anyhow::Result<()> {
    let variant = ColorVariant::from(args.variant);

    let result = ColorOutput {
        id: args.id.clone(),
        variant,
        color: identity::assign_color(args.id.as_str(), variant),
    };

    render_mode(
        output,
        &result,
        |r, w| writeln!(w, "{}\t{}\t{}", r.id, r.variant, r.color),
        |r, w| writeln!(w, "{}", r.color),
    )
}

pub fn run_identify(args: &IdArgs, output: OutputMode) -> anyhow::Result<()> {
    let assigned = identity::identify(args.id.as_str());
    let result = IdentifyOutput {
        id: args.id.clone(),
        name: assigned.name,
        primary_color: assigned.primary_color,
        secondary_color: assigned.secondary_color,
        table_version: TABLE_VERSION,
    };

    render_mode(
        output,
        &result,
        |r, w| {
            writeln!(
                w,
                "{}\t{}\t{}\t{}",
                r.id, r.name, r.primary_color, r.secondary_color
            )
        },
        |r, w| {
            pretty_kv(w, "id", &r.id)?;
            pretty_kv(w, "name", &r.name)?;
            pretty_kv(w, "primary", r.primary_color)?;
            pretty_kv(w, "secondary", r.secondary_color)?;
            pretty_kv(w, "tables", format!("v{}", r.table_version))
        },
    )
}
