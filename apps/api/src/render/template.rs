//! LaTeX source generation for a `TailoredResume`.
//!
//! All record text passes through [`escape_latex`]; sections with no content
//! are left out entirely.

use std::fmt::{self, Write};

use crate::models::TailoredResume;
use crate::render::ResumeTemplate;

struct TemplateStyle {
    font_size_pt: u8,
    margin_in: f32,
    item_sep_pt: u8,
    section_gap_pt: u8,
}

fn style(template: ResumeTemplate) -> TemplateStyle {
    match template {
        ResumeTemplate::Classic => TemplateStyle {
            font_size_pt: 11,
            margin_in: 0.75,
            item_sep_pt: 2,
            section_gap_pt: 10,
        },
        ResumeTemplate::Compact => TemplateStyle {
            font_size_pt: 10,
            margin_in: 0.5,
            item_sep_pt: 0,
            section_gap_pt: 6,
        },
    }
}

/// Escapes the ten LaTeX special characters.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' => out.push_str(r"\&"),
            '%' => out.push_str(r"\%"),
            '$' => out.push_str(r"\$"),
            '#' => out.push_str(r"\#"),
            '_' => out.push_str(r"\_"),
            '{' => out.push_str(r"\{"),
            '}' => out.push_str(r"\}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the full LaTeX document for `resume`.
pub fn render_latex(resume: &TailoredResume, template: ResumeTemplate) -> String {
    let mut tex = String::new();
    // fmt::Write into a String cannot fail.
    let _ = write_document(&mut tex, resume, &style(template));
    tex
}

fn write_document(
    tex: &mut String,
    resume: &TailoredResume,
    style: &TemplateStyle,
) -> fmt::Result {
    write_preamble(tex, style)?;
    write_header(tex, resume)?;

    if !resume.summary.trim().is_empty() {
        write_section(tex, "Summary", style)?;
        writeln!(tex, "{}\n", escape_latex(resume.summary.trim()))?;
    }

    if !resume.skills.is_empty() {
        write_section(tex, "Skills", style)?;
        let skills: Vec<String> = resume.skills.iter().map(|s| escape_latex(s)).collect();
        writeln!(tex, "{}\n", skills.join(", "))?;
    }

    if !resume.experience.is_empty() {
        write_section(tex, "Experience", style)?;
        for job in &resume.experience {
            write_entry(tex, &job.title, &job.company, &job.date_range)?;
            write_bullets(tex, &job.description_points, style)?;
        }
    }

    if !resume.education.is_empty() {
        write_section(tex, "Education", style)?;
        for school in &resume.education {
            write_entry(tex, &school.degree, &school.institution, &school.date_range)?;
        }
    }

    if !resume.projects.is_empty() {
        write_section(tex, "Projects", style)?;
        for project in &resume.projects {
            writeln!(
                tex,
                "\\textbf{{{}}}: {}\\par\\smallskip",
                escape_latex(&project.name),
                escape_latex(&project.description)
            )?;
        }
    }

    tex.push_str("\\end{document}\n");
    Ok(())
}

fn write_preamble(tex: &mut String, style: &TemplateStyle) -> fmt::Result {
    writeln!(
        tex,
        "\\documentclass[{}pt,letterpaper]{{article}}",
        style.font_size_pt
    )?;
    writeln!(
        tex,
        "\\usepackage[margin={}in]{{geometry}}",
        style.margin_in
    )?;
    tex.push_str("\\usepackage{enumitem}\n");
    tex.push_str("\\setlength{\\parindent}{0pt}\n");
    tex.push_str("\\pagestyle{empty}\n");
    tex.push_str("\\begin{document}\n");
    Ok(())
}

fn write_header(tex: &mut String, resume: &TailoredResume) -> fmt::Result {
    writeln!(tex, "\\begin{{center}}")?;
    writeln!(
        tex,
        "{{\\LARGE\\bfseries {}}}\\\\[4pt]",
        escape_latex(resume.name.trim())
    )?;
    if resume.contact.is_empty() {
        return writeln!(tex, "\\end{{center}}");
    }
    let contact: Vec<String> = [
        &resume.contact.email,
        &resume.contact.phone,
        &resume.contact.link,
    ]
    .into_iter()
    .filter(|c| !c.trim().is_empty())
    .map(|c| escape_latex(c.trim()))
    .collect();
    if !contact.is_empty() {
        writeln!(tex, "{}", contact.join(" \\textbar{} "))?;
    }
    writeln!(tex, "\\end{{center}}")
}

fn write_section(tex: &mut String, title: &str, style: &TemplateStyle) -> fmt::Result {
    writeln!(
        tex,
        "\\vspace{{{}pt}}{{\\large\\bfseries {}}}\\\\[-4pt]\\rule{{\\linewidth}}{{0.4pt}}\\par",
        style.section_gap_pt, title
    )
}

fn write_entry(tex: &mut String, heading: &str, place: &str, dates: &str) -> fmt::Result {
    write!(tex, "\\textbf{{{}}}", escape_latex(heading))?;
    if !dates.trim().is_empty() {
        write!(tex, "\\hfill {}", escape_latex(dates))?;
    }
    tex.push_str("\\par\n");
    if !place.trim().is_empty() {
        writeln!(tex, "\\textit{{{}}}\\par", escape_latex(place))?;
    }
    Ok(())
}

fn write_bullets(tex: &mut String, points: &[String], style: &TemplateStyle) -> fmt::Result {
    let points: Vec<&String> = points.iter().filter(|p| !p.trim().is_empty()).collect();
    if points.is_empty() {
        return Ok(());
    }
    writeln!(
        tex,
        "\\begin{{itemize}}[leftmargin=*,itemsep={}pt,topsep=2pt]",
        style.item_sep_pt
    )?;
    for point in points {
        writeln!(tex, "  \\item {}", escape_latex(point.trim()))?;
    }
    writeln!(tex, "\\end{{itemize}}")
}
