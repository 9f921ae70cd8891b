//! Text reports printed by the CLI

use serde::Serialize;

use calc_core::calculations::{CrackCheckInput, CrackCheckResult, MinReinforcementInput, MinReinforcementResult};
use calc_core::equations::Equation;
use calc_core::materials::{concrete_elastic_modulus, ConcreteGrade};

const RULE: &str = "═══════════════════════════════════════";

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

fn header(title: &str, label: &str) {
    println!("{RULE}");
    if label.is_empty() {
        println!("  {title}");
    } else {
        println!("  {title}: {label}");
    }
    println!("{RULE}");
    println!();
}

fn print_equations(equations: &[calc_core::equations::EquationUsage]) {
    let mut seen: Vec<Equation> = Vec::new();
    println!("References:");
    for usage in equations {
        if seen.contains(&usage.equation) {
            continue;
        }
        seen.push(usage.equation);
        let meta = usage.equation.metadata();
        println!("  {:<40} {}", meta.name, meta.reference.citation());
    }
    println!();
}

pub fn print_check(input: &CrackCheckInput, result: &CrackCheckResult) {
    let section = &input.section;
    header("CRACK WIDTH CHECK", &result.label);

    println!("Input:");
    println!(
        "  Section:  b = {:.0}, h = {:.0}, d = {:.0}, c = {:.0} mm",
        section.width_mm, section.height_mm, section.effective_depth_mm, section.cover_mm
    );
    println!("  Material: {}", input.materials.display_name());
    println!("  Steel:    {} = {:.1} mm²", input.reinforcement, result.provided_area_mm2);
    println!("  Load:     {}, {}", result.load_type, result.duration);
    println!("  Strain:   {}", result.strain_mode);
    println!();

    println!("Steel stress:");
    println!(
        "  σ_s = {:.1} MPa{}",
        result.steel_stress_mpa,
        if result.yield_capped { " (capped at f_yk)" } else { "" }
    );
    println!();

    println!("Crack width:");
    println!(
        "  h_c,eff = {:.1} mm, A_c,eff = {:.0} mm²",
        result.hc_eff_mm, result.ac_eff_mm2
    );
    println!(
        "  ρ_p,eff = {:.5}{}",
        result.rho_p_eff,
        if result.rho_p_eff_clamped { " (limited to 0.05)" } else { "" }
    );
    println!("  s_r,max = {:.1} mm", result.crack_spacing_mm);
    println!(
        "  ε_sm - ε_cm = {:.4e} ({:?})",
        result.strain_difference, result.strain_governed_by
    );
    println!(
        "  w_k = {:.3} mm vs {:.2} mm {}",
        result.crack_width_mm,
        result.crack_width_limit_mm,
        status_icon(result.crack_width_ok)
    );
    println!();

    println!("Minimum reinforcement:");
    println!(
        "  A_s,min = max({:.1}, {:.1}) = {:.1} mm² vs {:.1} mm² {}",
        result.min_area_strength_term_mm2,
        result.min_area_ratio_term_mm2,
        result.min_area_mm2,
        result.provided_area_mm2,
        status_icon(result.minimum_area_ok)
    );
    println!();

    print_equations(&result.equations);

    println!("{RULE}");
    println!(
        "  RESULT: {} (governs: {})",
        if result.passes() { "PASS" } else { "FAIL" },
        result.governing_condition()
    );
    println!("{RULE}");
}

pub fn print_solve(input: &MinReinforcementInput, result: &MinReinforcementResult) {
    header("MINIMUM REINFORCEMENT", &result.label);

    println!("Input:");
    println!("  Material: {}", input.materials.display_name());
    println!("  Bars:     {}", input.bar_diameter);
    println!("  Load:     {}, {}", input.load_type, input.duration);
    println!("  σ_s = {:.0} MPa, w_lim = {:.2} mm", result.steel_stress_mpa, result.crack_width_limit_mm);
    println!();

    println!("Seed:");
    println!("  A_s,abs,min = {:.1} mm²", result.absolute_min_area_mm2);
    println!(
        "  A_s,initial = {:.1}·{:.2}·f_ct,eff·{:.0}/σ_s = {:.1} mm²",
        result.kc, result.height_factor, result.tension_area_mm2, result.initial_area_mm2
    );
    println!("  Seed = {:.1} mm², step = {:.2} mm²", result.seed_area_mm2, result.step_mm2);
    println!();

    println!("Search ({} iterations):", result.iterations);
    for step in result.steps.iter().rev().take(3).rev() {
        println!(
            "  #{:<3} A_s = {:8.1} mm²  w_k = {:.3} mm",
            step.iteration, step.area_mm2, step.crack_width_mm
        );
    }
    println!();

    if !result.recommended_layouts.is_empty() {
        println!("Suggested bars:");
        for layout in &result.recommended_layouts {
            println!("  {:<10} {:7.1} mm²", layout.to_string(), layout.area_mm2());
        }
        println!();
    }

    print_equations(&result.equations);

    println!("{RULE}");
    println!(
        "  RESULT: A_s = {:.1} mm², w_k = {:.3} mm {} ({})",
        result.area_mm2,
        result.crack_width_mm,
        status_icon(result.is_converged()),
        result.status
    );
    println!("{RULE}");
}

/// One row of the strength class table
#[derive(Debug, Serialize)]
pub struct GradeRow {
    pub grade: &'static str,
    pub fck_mpa: f64,
    pub fctm_mpa: f64,
    pub ecm_mpa: f64,
}

pub fn grade_rows() -> Vec<GradeRow> {
    ConcreteGrade::ALL
        .iter()
        .map(|g| GradeRow {
            grade: g.code(),
            fck_mpa: g.fck_mpa(),
            fctm_mpa: g.fctm_mpa(),
            ecm_mpa: concrete_elastic_modulus(g.fck_mpa()),
        })
        .collect()
}

pub fn print_grades(rows: &[GradeRow]) {
    println!("{:<8} {:>6} {:>7} {:>8}", "Class", "f_ck", "f_ctm", "E_cm");
    for row in rows {
        println!(
            "{:<8} {:>6.0} {:>7.1} {:>8.0}",
            row.grade, row.fck_mpa, row.fctm_mpa, row.ecm_mpa
        );
    }
}
