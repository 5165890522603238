use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Paper name must contain at least one word")]
    EmptyName,

    #[error("Paper number must be all digits: {0}")]
    InvalidNumber(String),

    #[error("Paper directory already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// Files written for a new paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldedPaper {
    pub directory: PathBuf,
    pub markdown: PathBuf,
    pub makefile: PathBuf,
}

/// Creates `<number>_<name_words>/` under `root` with a Markdown skeleton
/// and a Makefile that builds `p<number>r0.html`.
pub fn scaffold_paper(
    root: &Path,
    number: &str,
    name: &str,
    author: &Author,
) -> Result<ScaffoldedPaper, ScaffoldError> {
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ScaffoldError::InvalidNumber(number.to_string()));
    }
    let words: Vec<String> = name.split_whitespace().map(str::to_lowercase).collect();
    if words.is_empty() {
        return Err(ScaffoldError::EmptyName);
    }

    let directory = root.join(format!("{number}_{}", words.join("_")));
    if directory.exists() {
        return Err(ScaffoldError::AlreadyExists(directory));
    }
    fs::create_dir_all(&directory)?;

    let markdown_name = format!("{}.md", words.join("-"));
    let markdown = directory.join(&markdown_name);
    fs::write(&markdown, skeleton(number, author))?;

    let makefile = directory.join("Makefile");
    fs::write(
        &makefile,
        format!("p{number}r0.html : {markdown_name}\ninclude ../md/mpark-wg21.mk\n"),
    )?;

    log::info!("Created {}", directory.display());
    Ok(ScaffoldedPaper {
        directory,
        markdown,
        makefile,
    })
}

fn skeleton(number: &str, author: &Author) -> String {
    format!(
        "---
title: \"\"
document: P{number}R0
date: today
audience: ???
author:
    - name: {}
      email: <{}>
toc: true
---

# Introduction
",
        author.name, author.email
    )
}
