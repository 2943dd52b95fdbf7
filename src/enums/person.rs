string_enum! {
    Gender {
        Male => "male",
        Female => "female",
        Other => "other",
        Unknown => "unknown",
        NonBinary => "nonbinary",
        GenderQueer => "genderqueer",
        TransGender => "transgender",
        Agender => "agender",
        Bigender => "bigender",
        TwoSpirit => "twospirit",
        PreferNotToSay => "prefer_not_to_say",
    }
}

string_enum! {
    AddressType {
        Home => "HOME",
        Work => "WORK",
    }
}

string_enum! {
    IdentificationDocType {
        NationalId => "NATIONALID",
        Passport => "PASSPORT",
        Military => "MILITARY",
    }
}

string_enum! {
    /// Medical specialty of a practitioner. Some wire values carry historical
    /// misspellings that clients already depend on.
    PractitionerSpecialty {
        Unspecified => "UNSPECIFIED",
        Anaesthesia => "ANAESTHESIA",
        CardiothoracicSurgery => "CARDIOTHORACIC_SURGERY",
        ClinicalMedicalGenetics => "CLINICAL_MEDICAL_GENETICS",
        ClinicalPathology => "CLINCICAL_PATHOLOGY",
        GeneralPathology => "GENERAL_PATHOLOGY",
        AnatomicPathology => "ANATOMIC_PATHOLOGY",
        ClinicalOncology => "CLINICAL_ONCOLOGY",
        Dermatology => "DERMATOLOGY",
        EarNoseAndThroat => "EAR_NOSE_AND_THROAT",
        EmergencyMedicine => "EMERGENCY_MEDICINE",
        FamilyMedicine => "FAMILY_MEDICINE",
        GeneralSurgery => "GENERAL_SURGERY",
        Geriatrics => "GERIATRICS",
        Immunology => "IMMUNOLOGY",
        InfectiousDisease => "INFECTIOUS_DISEASE",
        InternalMedicine => "INTERNAL_MEDICINE",
        Microbiology => "MICROBIOLOGY",
        Neurosurgery => "NEUROSURGERY",
        ObstetricsAndGynaecology => "OBSTETRICS_AND_GYNAECOLOGY",
        OccupationalMedicine => "OCCUPATIONAL_MEDICINE",
        Ophthalmology => "OPGTHALMOLOGY",
        OrthopaedicSurgery => "ORTHOPAEDIC_SURGERY",
        Oncology => "ONCOLOGY",
        OncologyRadiotherapy => "ONCOLOGY_RADIOTHERAPY",
        PaediatricsAndChildHealth => "PAEDIATRICS_AND_CHILD_HEALTH",
        PalliativeMedicine => "PALLIATIVE_MEDICINE",
        PlasticAndReconstructiveSurgery => "PLASTIC_AND_RECONSTRUCTIVE_SURGERY",
        Psychiatry => "PSYCHIATRY",
        PublicHealth => "PUBLIC_HEALTH",
        Radiology => "RADIOLOGY",
        Urology => "UROLOGY",
    }
}
