//! Generated portfolio dataset module.
//!
//! Produced by the console export action. To adopt the session edits
//! permanently, replace `src/data/portfolio_data.rs` with this file.

/// Bundled dataset as pretty-printed JSON.
pub const PORTFOLIO_JSON: &str = r#"{
  "name": "Dana Prasetyo",
  "headline": "Manufacturing engineer building AI-assisted production tooling.",
  "summary": "I connect shop-floor reality with software: line data capture, quality dashboards and small automation that operators actually use.",
  "profileImage": "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&q=80&w=800",
  "contact": {
    "email": "dana.prasetyo@folio.example",
    "phone": "+62 812 0000 1907",
    "linkedin": "linkedin.com/in/dana-prasetyo",
    "location": "Karawang, Indonesia"
  },
  "education": [
    {
      "institution": "Politeknik Manufaktur Bandung",
      "major": "Manufacturing Engineering Technology",
      "period": "2017 - 2021",
      "details": [
        "Final project: vision-based defect counting rig for stamped parts",
        "Student lead, industrial automation laboratory"
      ]
    }
  ],
  "experience": [
    {
      "role": "Process Engineer",
      "company": "PT Karya Presisi",
      "period": "2023 - Present",
      "location": "Karawang",
      "type": "Professional",
      "achievements": [
        "Cut changeover time 28% by re-sequencing die setup steps",
        "Built an hourly OEE capture sheet adopted across three lines",
        "Piloted camera-based reject tally replacing manual counting"
      ]
    },
    {
      "role": "Production Engineering Intern",
      "company": "PT Mitra Komponen",
      "period": "2021 - 2022",
      "location": "Bekasi",
      "type": "Internship",
      "achievements": [
        "Mapped scrap sources on the welding line and proposed two fixes",
        "Wrote the line's first digital andon handover log"
      ]
    }
  ],
  "skills": [
    {
      "category": "Manufacturing",
      "items": ["Lean / 5S", "OEE analysis", "PFMEA", "Die changeover"]
    },
    {
      "category": "Software",
      "items": ["Python", "SQL", "Grafana", "OpenCV"]
    },
    {
      "category": "Collaboration",
      "items": ["Operator training", "Kaizen facilitation", "Supplier audits"]
    }
  ],
  "certifications": [
    {
      "title": "BNSP Certified Quality Technician",
      "issuer": "Badan Nasional Sertifikasi Profesi",
      "date": "2022",
      "details": "National competency certification for quality inspection."
    },
    {
      "title": "Yellow Belt Lean Six Sigma",
      "issuer": "PQM Consultants",
      "date": "2023",
      "details": "Waste identification and small-scope improvement projects."
    }
  ],
  "projects": [
    {
      "title": "Reject Tally Camera",
      "description": "Edge camera counting stamped-part rejects into a line dashboard, replacing clipboard tallies.",
      "year": "2024",
      "stack": ["Python", "OpenCV", "MQTT", "Grafana"],
      "impact": "Manual counting eliminated on two lines"
    },
    {
      "title": "Changeover Playbook",
      "description": "Step-by-step digital playbook for die changeovers with timed checkpoints and photo references.",
      "year": "2023",
      "stack": ["SQLite", "Flask"],
      "impact": "28% faster average changeover"
    }
  ]
}"#;
