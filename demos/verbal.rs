// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_verbal::Expression;

pub fn main() {
    url();
    replace();
}

fn url() {
    let mut exp = Expression::new();
    exp.start_of_line()
        .then("http")
        .maybe("s")
        .then("://")
        .something_but(" ")
        .end_of_line();

    println!("Pattern: {}", exp);

    for text in ["https://www.example.com", "http://example.org", "ftp://example.net"] {
        match exp.is_match(text) {
            Ok(true) => println!("Valid URL: {}", text),
            Ok(false) => println!("Invalid URL: {}", text),
            Err(e) => println!("Error: {}", e),
        }
    }
}

fn replace() {
    let mut exp = Expression::new();
    exp.then("red").or("blue");

    match exp.replace("The color is red and the background is blue.", "green") {
        Ok(s) => println!("Replaced: {}", s),
        Err(e) => println!("Error: {}", e),
    }
}
