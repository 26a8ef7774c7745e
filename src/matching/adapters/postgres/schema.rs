//! Diesel schema for matching persistence.

diesel::table! {
    /// Registered candidates with their assignment workload counter.
    recruits (reg_no) {
        /// Candidate registration number.
        #[max_length = 64]
        reg_no -> Varchar,
        /// Candidate display name.
        #[max_length = 255]
        name -> Varchar,
        /// Contact email address.
        #[max_length = 255]
        email -> Varchar,
        /// Contact phone number.
        #[max_length = 32]
        phone -> Varchar,
        /// Count of committed assignments, used for fair selection.
        workload_count -> Int4,
    }
}

diesel::table! {
    /// Pending and assigned volunteer submissions.
    submissions (id) {
        /// Submission identifier.
        id -> Uuid,
        /// Candidate registration number.
        #[max_length = 64]
        reg_no -> Varchar,
        /// Candidate name denormalised at submission time.
        #[max_length = 255]
        name -> Varchar,
        /// Phone number denormalised at submission time.
        #[max_length = 32]
        phone -> Varchar,
        /// Target company.
        #[max_length = 255]
        company -> Varchar,
        /// Target slot.
        #[max_length = 255]
        slot -> Varchar,
        /// Lifecycle status, `pending` or `assigned`.
        #[max_length = 16]
        status -> Varchar,
        /// Acceptance timestamp, tie-break key for selection.
        submitted_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only assignment records.
    volunteering (id) {
        /// Record identifier.
        id -> Uuid,
        /// Matched candidate registration number.
        #[max_length = 64]
        reg_no -> Varchar,
        /// Matched candidate name.
        #[max_length = 255]
        name -> Varchar,
        /// Matched candidate email.
        #[max_length = 255]
        email -> Varchar,
        /// Matched candidate phone number.
        #[max_length = 32]
        phone -> Varchar,
        /// Assigned company.
        #[max_length = 255]
        company -> Varchar,
        /// Assigned slot.
        #[max_length = 255]
        slot -> Varchar,
        /// Fixed record type tag.
        #[max_length = 64]
        kind -> Varchar,
        /// Assignment commit timestamp.
        assigned_at -> Timestamptz,
    }
}
