//! Static table of languages the remote service can run

mod java;

use java::normalize as normalize_entry_point;

use std::collections::HashMap;
use std::sync::LazyLock;

/// Language-specific rewriting applied before submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Source and stdin are sent as written
    Passthrough,
    /// The public entry type must carry this name, since the submitted file is
    /// always `main.<ext>`. Stdin gets a trailing newline so that blocking
    /// token readers see the last token.
    FixedEntryPoint(&'static str),
}

/// How one canonical language maps onto the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    pub canonical_id: &'static str,
    pub remote_id: &'static str,
    pub file_extension: &'static str,
    /// `None` runs whatever version the remote considers latest
    pub remote_version: Option<&'static str>,
    pub normalization: Normalization,
    /// Hello-world program used to seed an empty editor buffer
    pub template: &'static str,
}

impl LanguageDescriptor {
    pub fn version_or_latest(&self) -> &'static str {
        self.remote_version.unwrap_or("*")
    }

    pub fn file_name(&self) -> String {
        format!("main.{}", self.file_extension)
    }

    /// Returns the (source, stdin) pair to submit
    pub fn normalize(&self, code: &str, input: &str) -> (String, String) {
        match self.normalization {
            Normalization::Passthrough => (code.to_string(), input.to_string()),
            Normalization::FixedEntryPoint(entry) => normalize_entry_point(entry, code, input),
        }
    }
}

const fn lang(
    canonical_id: &'static str,
    file_extension: &'static str,
    remote_version: &'static str,
    template: &'static str,
) -> LanguageDescriptor {
    LanguageDescriptor {
        canonical_id,
        remote_id: canonical_id,
        file_extension,
        remote_version: Some(remote_version),
        normalization: Normalization::Passthrough,
        template,
    }
}

/// Every supported language, in display order
pub static LANGUAGES: &[LanguageDescriptor] = &[
    lang(
        "javascript",
        "js",
        "18.15.0",
        r#"console.log("Hello, World!");"#,
    ),
    lang("python", "py", "3.10.0", r#"print("Hello, World!")"#),
    LanguageDescriptor {
        canonical_id: "java",
        remote_id: "java",
        file_extension: "java",
        remote_version: Some("15.0.2"),
        normalization: Normalization::FixedEntryPoint("Main"),
        template: r#"import java.util.*;
import java.io.*;
public class Main {
    public static void main(String[] args) {
        System.out.println("Hello, World!");
    }
}"#,
    },
    lang(
        "cpp",
        "cpp",
        "10.2.0",
        r#"#include <iostream>
using namespace std;

int main() {
    cout << "Hello, World!" << endl;
    return 0;
}"#,
    ),
    lang(
        "c",
        "c",
        "10.2.0",
        r#"#include <stdio.h>

int main() {
    printf("Hello, World!\n");
    return 0;
}"#,
    ),
    lang(
        "csharp",
        "cs",
        "6.12.0",
        r#"using System;

class Program {
    static void Main() {
        Console.WriteLine("Hello, World!");
    }
}"#,
    ),
    lang("ruby", "rb", "3.0.1", r#"puts "Hello, World!""#),
    lang(
        "go",
        "go",
        "1.16.2",
        r#"package main

import "fmt"

func main() {
    fmt.Println("Hello, World!")
}"#,
    ),
    lang(
        "rust",
        "rs",
        "1.68.2",
        r#"fn main() {
    println!("Hello, World!");
}"#,
    ),
    lang(
        "typescript",
        "ts",
        "5.0.3",
        r#"console.log("Hello, World!");"#,
    ),
    lang(
        "php",
        "php",
        "8.2.3",
        r#"<?php
echo "Hello, World!";
?>"#,
    ),
];

static BY_ID: LazyLock<HashMap<&'static str, &'static LanguageDescriptor>> =
    LazyLock::new(|| LANGUAGES.iter().map(|l| (l.canonical_id, l)).collect());

/// Exact, case-sensitive lookup by canonical id
pub fn lookup(language: &str) -> Option<&'static LanguageDescriptor> {
    BY_ID.get(language).copied()
}

pub fn is_supported(language: &str) -> bool {
    BY_ID.contains_key(language)
}

pub fn supported_languages() -> Vec<&'static str> {
    LANGUAGES.iter().map(|l| l.canonical_id).collect()
}

pub fn starter_template(language: &str) -> Option<&'static str> {
    lookup(language).map(|l| l.template)
}
