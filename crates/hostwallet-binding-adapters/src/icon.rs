pub const ICON_SVG: &str = r##"<svg width="40" height="40" viewBox="0 0 40 40" fill="none" xmlns="http://www.w3.org/2000/svg">
  <rect width="40" height="40" rx="10" fill="#1A56DB"/>
  <path d="M10 14a4 4 0 0 1 4-4h12a4 4 0 0 1 4 4v12a4 4 0 0 1-4 4H14a4 4 0 0 1-4-4V14z" fill="#fff"/>
  <path d="M22 18h8v4h-8a2 2 0 1 1 0-4z" fill="#1A56DB"/>
  <circle cx="23.5" cy="20" r="1.5" fill="#fff"/>
</svg>"##;
