//! HTML profile report

use crate::data::ProfileRecord;

const REPORT_HEAD: &str = r#"<html>
<head>
    <title>Instagram Profile Report</title>
    <style>
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #f4f7f6;
            color: #333;
            margin: 0;
            padding: 0;
        }
        h1 {
            text-align: center;
            color: #2c3e50;
            font-size: 2.5em;
            margin-top: 40px;
        }
        .container {
            width: 80%;
            margin: 0 auto;
            background-color: #ffffff;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
            margin-top: 20px;
        }
        .section-title {
            font-size: 20px;
            font-weight: bold;
            color: #2c3e50;
            margin-top: 20px;
            border-bottom: 2px solid #3498db;
            padding-bottom: 5px;
            margin-bottom: 20px;
        }
        .profile-info p {
            font-size: 16px;
            line-height: 1.6;
            margin: 10px 0;
        }
        .key {
            font-weight: bold;
            color: #3498db;
        }
        .footer {
            text-align: center;
            font-size: 14px;
            color: #95a5a6;
            margin-top: 30px;
            padding-top: 20px;
            border-top: 2px solid #ecf0f1;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>Instagram Profile Report</h1>
        <div class="section-title">Profile Information</div>
        <div class="profile-info">
"#;

const REPORT_TAIL: &str = r#"        </div>
        <div class="footer">
            <p>Generated by Instagram Profile Fetcher</p>
        </div>
    </div>
</body>
</html>
"#;

/// Render the standalone HTML report for one profile snapshot.
///
/// Lists every field except the picture URL (the picture itself sits next
/// to the report on disk). All values are HTML-escaped.
pub fn render_report(record: &ProfileRecord) -> String {
    let yes_no = |flag: bool| if flag { "Yes" } else { "No" };

    let rows: [(&str, String); 9] = [
        ("Username", record.username.clone()),
        ("Full Name", record.full_name.clone()),
        ("Bio", record.biography.clone()),
        ("Followers", record.followers.to_string()),
        ("Following", record.following.to_string()),
        ("Posts", record.posts.to_string()),
        (
            "External URL",
            record.external_url.clone().unwrap_or_else(|| "N/A".to_string()),
        ),
        ("Is Business Account", yes_no(record.is_business_account).to_string()),
        ("Is Verified", yes_no(record.is_verified).to_string()),
    ];

    let mut html = String::from(REPORT_HEAD);
    for (key, value) in rows {
        html.push_str(&format!(
            "            <p><span class='key'>{}:</span> {}</p>\n",
            key,
            html_escape::encode_text(&value)
        ));
    }
    html.push_str(REPORT_TAIL);
    html
}
