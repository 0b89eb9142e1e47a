// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Every library source file carries the project header.

const SOURCES: &[(&str, &str)] = &[
    ("aos-error/src/codes.rs", include_str!("../../aos-error/src/codes.rs")),
    ("aos-error/src/errno.rs", include_str!("../../aos-error/src/errno.rs")),
    ("aos-error/src/errors.rs", include_str!("../../aos-error/src/errors.rs")),
    ("aos-error/src/helpers.rs", include_str!("../../aos-error/src/helpers.rs")),
    ("aos-error/src/lib.rs", include_str!("../../aos-error/src/lib.rs")),
    ("aos-error/src/macros.rs", include_str!("../../aos-error/src/macros.rs")),
    ("aos-error/src/prelude.rs", include_str!("../../aos-error/src/prelude.rs")),
    ("aos-error/src/ret.rs", include_str!("../../aos-error/src/ret.rs")),
    ("aos-foundation/src/array.rs", include_str!("../src/array.rs")),
    ("aos-foundation/src/buffer.rs", include_str!("../src/buffer.rs")),
    ("aos-foundation/src/config.rs", include_str!("../src/config.rs")),
    ("aos-foundation/src/lib.rs", include_str!("../src/lib.rs")),
    ("aos-foundation/src/macros.rs", include_str!("../src/macros.rs")),
    ("aos-foundation/src/string.rs", include_str!("../src/string.rs")),
    ("aos-foundation/src/variant.rs", include_str!("../src/variant.rs")),
];

#[test]
fn test_headers_credit_project() {
    for (path, source) in SOURCES {
        let header: Vec<&str> = source.lines().take_while(|line| line.starts_with("//")).collect();

        assert!(header.first().is_some_and(|line| line.starts_with("// AOS - ")), "{path}");
        assert!(
            header.contains(&"// Copyright (c) 2025 The AOS Project Developers"),
            "{path}"
        );
        assert!(header.contains(&"// SPDX-License-Identifier: MIT"), "{path}");

        let ids = header
            .iter()
            .find_map(|line| line.strip_prefix("// SW-REQ-ID: "))
            .unwrap_or_else(|| panic!("{path}: no requirement ids"));
        assert!(ids.split(", ").all(|id| id.starts_with("AOS-CORE-")), "{path}");
    }
}
