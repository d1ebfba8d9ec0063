// Fixed candidate lists for synthetic contract records.
// Placeholders: `{keyword}` (title-cased in titles), `{department}`.

/// One slot's worth of wording. Slot `i` of every search uses `TEMPLATES[i]`.
pub struct Template {
    pub title: &'static str,
    pub notice_type: &'static str,
    pub naics_code: &'static str,
    pub scope: &'static str,
}

pub const TEMPLATES: [Template; 3] = [
    Template {
        title: "{keyword} Services and Maintenance Contract",
        notice_type: "Combined Synopsis/Solicitation",
        naics_code: "561210",
        scope: "The {department} is seeking qualified contractors to provide comprehensive \
            {keyword} services for federal facilities. This includes regular maintenance, \
            seasonal work, equipment provision, and emergency response services. Contractors \
            must demonstrate experience with similar government contracts and meet all federal \
            compliance requirements. The contract period is for a base year with four option years.",
    },
    Template {
        title: "Multi-Site {keyword} and Landscape Management",
        notice_type: "Solicitation",
        naics_code: "561730",
        scope: "This procurement by the {department} is for professional {keyword} and \
            landscape management services at multiple federal buildings and grounds in the \
            region. The scope includes design consultation, material selection and installation, \
            system maintenance, integrated pest management, and sustainable site practices. \
            Preference is given to contractors with LEED certifications, sustainable {keyword} \
            practices, and veteran-owned business status.",
    },
    Template {
        title: "{keyword} Equipment and Materials Supply Contract",
        notice_type: "Presolicitation",
        naics_code: "423850",
        scope: "The {department} requires {keyword} equipment, materials, and supplies for \
            multiple locations nationwide. This includes commercial-grade equipment, maintenance \
            tools, consumable materials, and professional installation services. Deliveries must \
            meet federal sustainability standards and support small business participation. This \
            is a multi-year indefinite delivery/indefinite quantity (IDIQ) contract with a ceiling \
            of $5M.",
    },
];

pub const DEPARTMENTS: &[&str] = &[
    "Department of General Services",
    "General Services Administration",
    "Department of Veterans Affairs",
    "Department of Defense",
    "Department of the Interior",
    "Department of Agriculture",
    "Department of Homeland Security",
    "Department of Energy",
];

/// Characters for the random notice id suffix (no 0/O or 1/I).
pub const NOTICE_SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
