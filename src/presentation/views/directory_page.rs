// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::search_request::FacultyView;
use crate::domain::models::faculty::DepartmentMatches;
use crate::utils::text_processing::title_case;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::{self, Write};

pub const PROMPT_MESSAGE: &str =
    "Please enter a technology or specialization to find matching faculty.";

/// 渲染检索页面所需的数据
#[derive(Debug)]
pub struct DirectoryPage<'a> {
    /// 已规范化的检索词
    pub query: &'a str,
    pub currently_teaching_only: bool,
    /// 页面上列出的可用关键词
    pub keywords: &'a [String],
    /// 检索词为空时为 `None`
    pub results: Option<&'a [DepartmentMatches]>,
}

pub fn no_match_message(department_code: &str) -> String {
    format!(
        "No {} faculty found for this specialization (or none currently teaching if filtered).",
        department_code
    )
}

/// 渲染完整的 HTML 页面，所有数据文本都经过转义
pub fn render(page: &DirectoryPage<'_>) -> Result<String, fmt::Error> {
    let mut html = String::with_capacity(16 * 1024);
    render_into(&mut html, page)?;
    Ok(html)
}

fn render_into(html: &mut String, page: &DirectoryPage<'_>) -> fmt::Result {

    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>SME Tech Guru</title>\n<style>\n\
         body{font-family:sans-serif;margin:2rem;}\n\
         table{border-collapse:collapse;width:100%;}\n\
         th,td{border:1px solid #ccc;padding:.4rem;text-align:left;}\n\
         .info{background:#e8f0fe;padding:.6rem;border-radius:4px;}\n\
         </style>\n</head>\n<body>\n",
    );

    html.push_str("<h2>Agile Assembly proudly presents:</h2>\n");
    html.push_str("<h1>\u{1F4A1} SME Tech Guru \u{1F4A1}</h1>\n");
    html.push_str("<h3><em>A Prince Campus Company</em></h3>\n");
    html.push_str(
        "<p>Welcome, students! This app helps you find the perfect faculty member for your \
         research doubts and project assistance. Simply enter a technology or research area \
         you're interested in, and we'll show you the experts!</p>\n<hr>\n",
    );

    html.push_str("<p>these are the key word to use:</p>\n<ul class=\"keywords\">\n");
    for keyword in page.keywords {
        writeln!(html, "<li>{}</li>", encode_text(keyword))?;
    }
    html.push_str("</ul>\n");

    render_form(html, page)?;
    html.push_str("<hr>\n");

    match page.results {
        Some(results) => {
            writeln!(
                html,
                "<h3>Faculty specializing in: <strong>{}</strong></h3>",
                encode_text(&title_case(page.query))
            )?;
            for (index, matches) in results.iter().enumerate() {
                if index > 0 {
                    html.push_str("<hr>\n");
                }
                render_department(html, matches)?;
            }
        }
        None => {
            writeln!(html, "<p class=\"info\">{}</p>", PROMPT_MESSAGE)?;
        }
    }

    html.push_str("<hr>\n<p>Feel free to explore different specializations! \u{2728}</p>\n");
    html.push_str("</body>\n</html>\n");
    Ok(())
}

fn render_form(html: &mut String, page: &DirectoryPage<'_>) -> fmt::Result {
    write!(
        html,
        "<form method=\"get\" action=\"/\">\n\
         <label for=\"q\">Enter the Technology/Specialization (e.g., Machine Learning, \
         Cybersecurity, Networks):</label>\n\
         <input type=\"text\" id=\"q\" name=\"q\" value=\"{}\">\n\
         <input type=\"hidden\" name=\"submitted\" value=\"1\">\n\
         <label><input type=\"checkbox\" name=\"teaching\" value=\"on\"{}> \
         Show only faculty currently teaching in their specialization</label>\n\
         <button type=\"submit\">Search</button>\n</form>\n",
        encode_double_quoted_attribute(page.query),
        if page.currently_teaching_only {
            " checked"
        } else {
            ""
        }
    )
}

fn render_department(html: &mut String, matches: &DepartmentMatches) -> fmt::Result {
    let code = matches.department.code();
    if matches.is_empty() {
        return writeln!(html, "<p class=\"info\">{}</p>", no_match_message(code));
    }

    writeln!(
        html,
        "<h3>{}</h3>\n<table id=\"{}-results\">\n<thead><tr>\
         <th>Name</th><th>Designation</th><th>Specialization</th>\
         <th>Research Papers</th><th>PhD Guidance</th><th>Currently Teaching</th>\
         </tr></thead>\n<tbody>",
        matches.department.label(),
        code.to_ascii_lowercase()
    )?;
    for record in &matches.faculty {
        let view = FacultyView::from(record);
        writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            encode_text(&view.name),
            encode_text(&view.designation),
            encode_text(&view.specialization),
            encode_text(&view.publication_count),
            encode_text(&view.phd_guidance),
            view.currently_teaching_same_specialization
        )?;
    }
    html.push_str("</tbody>\n</table>\n");
    Ok(())
}
