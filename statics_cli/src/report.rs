//! Plain-text rendering of analysis results.

use std::fmt::{self, Write};

use statics_core::api::AnalysisResponse;
use statics_core::calculations::reactions::ReactionSet;

const RULE: &str = "═══════════════════════════════════════";

pub fn reactions_line(r: &ReactionSet) -> String {
    format!("RA={:.2} RB={:.2} RC={:.2}", r.a, r.b, r.c)
}

pub fn analysis(response: &AnalysisResponse) -> String {
    let mut out = String::new();
    // Writing into a String never fails
    let _ = write_analysis(&mut out, response);
    out
}

fn write_analysis(out: &mut impl Write, response: &AnalysisResponse) -> fmt::Result {
    let a = &response.analysis;
    let units = response.metadata.unit_system;
    let (f, l, m) = (units.force(), units.length(), units.moment());

    writeln!(out, "{}", RULE)?;
    writeln!(out, "  BEAM STATICS RESULTS")?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;

    writeln!(out, "Supports:")?;
    let s = &a.supports;
    for (name, support) in [("A", &s.a), ("B", &s.b), ("C", &s.c)] {
        let kind = support.support_type.display_name();
        match support.position {
            Some(x) => writeln!(out, "  {}: {:<7} at {:.3} {}", name, kind, x, l)?,
            None => writeln!(out, "  {}: {}", name, kind)?,
        }
    }
    writeln!(out)?;

    writeln!(out, "Reactions:")?;
    let r = &a.reactions;
    for (name, c) in [("A", &r.a), ("B", &r.b), ("C", &r.c)] {
        writeln!(
            out,
            "  R{} = {:>12.3} {}  (horizontal {:.3})",
            name, c.vertical, f, c.horizontal
        )?;
    }
    writeln!(out)?;

    let eq = &a.equilibrium;
    writeln!(out, "Equilibrium:")?;
    writeln!(out, "  ΣF       = {:.3} {}", eq.sum_vertical_loads, f)?;
    writeln!(out, "  ΣF·x     = {:.3} {}", eq.sum_moment_about_a, m)?;
    writeln!(out, "  T        = {:.3} {}", eq.torsor, m)?;
    writeln!(out, "  ΣR       = {:.3} {}", eq.sum_reactions, f)?;
    writeln!(
        out,
        "  residual = {:.3e} {} / {:.3e} {}",
        eq.residual_force, f, eq.residual_moment, m
    )?;
    writeln!(out, "  {}", if eq.balanced { "[OK] balanced" } else { "[!] not balanced" })?;
    writeln!(out)?;

    match a.center_of_mass {
        Some(x) => writeln!(out, "Load resultant at x = {:.3} {}", x, l)?,
        None => writeln!(out, "Load resultant: none (ΣF = 0)")?,
    }
    if let Some(v) = a.max_abs_shear() {
        writeln!(out, "  V_max = {:.3} {} at x = {:.3} {}", v.shear, f, v.position, l)?;
    }
    if let Some(mm) = a.max_abs_moment() {
        writeln!(out, "  M_max = {:.3} {} at x = {:.3} {}", mm.moment, m, mm.position, l)?;
    }
    writeln!(out)?;

    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "  {} samples  |  {}",
        a.diagrams.positions.len(),
        response.metadata.timestamp
    )?;
    writeln!(out, "{}", RULE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use statics_core::api::{analyze, BeamRequest};
    use statics_core::calculations::beam::BeamConfiguration;
    use statics_core::calculations::supports::SupportType;
    use statics_core::loads::PointLoad;

    #[test]
    fn lists_every_support_and_reaction() {
        let beam = BeamConfiguration::new(10.0)
            .with_point_load(PointLoad::new(5.0, 100.0))
            .with_support_c(SupportType::Fixed, 5.0)
            .with_num_points(20);
        let text = analysis(&analyze(&BeamRequest::new(beam)).unwrap());
        assert!(text.contains("  C: Fixed   at 5.000 m"));
        for name in ["RA =", "RB =", "RC ="] {
            assert!(text.contains(name), "missing {}", name);
        }
        assert!(text.contains("21 samples"));
        assert!(text.trim_end().ends_with(RULE));
    }
}
