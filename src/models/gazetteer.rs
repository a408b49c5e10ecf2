// Known Moroccan place names, searched in this order for the place of birth.
// Duplicates are kept; a repeated entry can never win over its first occurrence.
pub const MOROCCAN_PLACES: &[&str] = &[
    "CASABLANCA", "RABAT", "FES", "MARRAKECH", "AGADIR", "TANGIER", "MEKNES",
    "OUJDA", "KENITRA", "TETOUAN", "SALE", "TEMARA", "MOHAMMEDIA", "KHOURIBGA",
    "JADIDA", "OUARZAZATE", "SAFI", "BENI MELLAL", "EL JADIDA", "TAZA", "NADOR",
    "LARACHE", "KSAR EL KEBIR", "ERRACHIDIA", "TAROUDANT", "BERKANE", "SIDI KACEM",
    "TAOURIRT", "GUELMIM", "TIZNIT", "TIFLET", "YOUSSOUFIA", "MIDELT", "SIDI SLIMANE",
    "SEFROU", "AZROU", "DEMNATE", "BOUJDOUR", "TAN-TAN", "FIGUIG", "ASILAH",
    "CHEFCHAOUEN", "DRIOUCH", "ZAGORA", "TINGHIR", "SMARA", "LAAYOUNE", "DAKHLA",
    "BOUDNIB", "IFRANE", "ESSAOUIRA", "KHENIFRA", "SIDI IFNI", "BERRECHID",
    "SKHIRAT", "AIN HARROUDA", "BOUZNIKA", "SIDI BENNOUR", "FQUIH BEN SALAH",
    "SOUK EL ARBAA", "OUED ZEM", "SIDI YAHYA ZAER", "BOUARFA", "TARFAYA", "AKKA",
    "TATA", "OULAD TEIMA", "SIDI BOUZID", "BIR LEHLU", "AIT MELLOUL", "INEZGANE",
    "DRARGUA", "BIOUGRA", "CHICHAOUA", "EL KELAA DES SRAGHNA", "BEN GUERIR",
    "YOUSSOUFIA", "SIDI RAHHAL", "AMIZMIZ", "ASNI", "IMLIL", "OUIRGANE", "TAMANAR",
    "SIDI KAOUKI", "TAMRI", "TAGHAZOUT", "AOURIR", "BELFAA", "TIZNIT", "TAFRAOUT",
    "MIRLEFT", "SIDI BOUATI", "SIDI BOUKNADEL", "MEHDYA", "MOUNA", "SIDI ALLAL EL BAHRAOUI",
    "SIDI SLIMANE", "SIDI TAIBI", "SIDI YAHYA EL GHARB", "SIDI BETTACHE", "SIDI BOUGHAABA",
    "SIDI HARAZEM", "VOLUBILIS", "MOULAY IDRISS", "SIDI KERKOUM", "SIDI ALI BEN HAMDOUCHE",
    "SIDI CHAMHAROUCH", "SIDI IFNI", "SIDI MOUSSA", "SIDI BOU OTHMANE", "SIDI BOUNAMANE",
    "SIDI BOUZID", "SIDI DAOUD", "SIDI EL AIDI", "SIDI HAJJAJ", "SIDI HRAZEM",
    "SIDI MOHAMED BEN ABDELLAH", "SIDI RAHHAL CHATAI", "SIDI SMAIL", "SIDI YAHYA OU SAAD",
    "SIDI YAHYA DES ZAERS", "SIDI ZOUINE", "SIDI ABDELLAH", "SIDI ABDELLAH BEN MBAREK",
    "SIDI ALI BOUGHALEB", "SIDI ALI LAGHDARI", "SIDI ALLAL TAZI", "SIDI BOUKNADEL",
    "SIDI BOURHABA", "SIDI BRAHIM", "SIDI BOUZID", "SIDI DAOUDI", "SIDI EL HATTAB",
    "SIDI HAMZA", "SIDI HARAZEM", "SIDI HAZEM", "SIDI HSSAIN", "SIDI KACEM",
    "SIDI LAHCEN", "SIDI LYAMANI", "SIDI MOHAMED BEN YOUSSEF", "SIDI MOHAMED LAHMER",
    "SIDI MOUMEN", "SIDI MOUSTAFA", "SIDI RAHHAL", "SIDI RAHHAL EL GHAZOUANI",
    "SIDI SLIMANE", "SIDI SMAIL", "SIDI TAIBI", "SIDI YAHIA", "SIDI YAHYA EL GHARB",
    "SIDI YOUSSEF BEN AHMED", "SIDI ZOUINE", "BOJADOR", "LAGOUIRA", "BIR ANZARANE",
    "MAHDIA", "FAM EL HISN", "GUELTA ZEMMUR", "OUED EDDAHAB", "AOUSSERD", "BIR GANDOUZ",
    "TICHLA", "ZOUERAT", "AIN BENI MATHAR", "BOUANANE", "TALSINNT", "AKHFENNIR",
    "TARFAYA", "LAMSSID", "LABOUIRAT", "LEGUIRA", "BIR ENZARAN", "AMGALA", "HAWZA",
    "TICHLA", "BOUKRAA", "TINDOUF", "TINJIDAD", "TINZOULINE", "TISSINT", "TIZI NISLY",
    "TIZI OUSSEMI", "TIZOUGHRINE", "TIZI NTLATA", "TIZI RACHED", "TIZI NCHTKA",
    "TIZI OUAGANE", "TIZI OUADOU", "TIZI OUMALOU", "TIZI OUGHRANE", "TIZI OULOUZ",
    "TIZI RHELISSA", "TIZI TGHEST", "TIZI TCHTKA", "TIZI NTERGA", "TIZI OUADOU",
    "TIZI OUAGLAM", "TIZI OUADOU", "TIZI OUADOU", "TIZI OUADOU", "TIZI OUADOU",
    "AL HOCEIMA", "NADOR", "TAOURIRT", "BERKANE", "DRIOUCH", "OUAZZANE", "TARGUIST",
    "BAB BERRED", "BAB TAZA", "BENI ANSAR", "BENI CHIKAR", "BENI HADIFA", "BENI SIDEL",
    "BENI SIDEL JEBEL", "BENI BOUAYACH", "BENI BOUFRAH", "BENI BOUZRA", "BENI DERKOUL",
    "BENI ENSAR", "BENI GMIL", "BENI GMILA", "BENI GUIL", "BENI HARCHEM", "BENI HOUNK",
    "BENI KHIAR", "BENI LECHKER", "BENI MALIK", "BENI MARGHINE", "BENI MEZALA",
    "BENI MHAMMED", "BENI OULID", "BENI OURIAGHEL", "BENI SAID", "BENI SIDEL",
    "BENI SMIR", "BENI TADJIT", "BENI TIZI", "BENI TOUZINE", "BENI YAKHLEF",
    "BENI YENNI", "BENI ZRANTEL", "BENI ZRANTEL", "BENI ZRANTEL",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_cities_lead_the_list() {
        assert_eq!(MOROCCAN_PLACES[0], "CASABLANCA");
        let fes = MOROCCAN_PLACES.iter().position(|p| *p == "FES").unwrap();
        let casa = MOROCCAN_PLACES.iter().position(|p| *p == "CASABLANCA").unwrap();
        assert!(casa < fes);
    }

    #[test]
    fn test_entries_are_uppercase() {
        assert!(MOROCCAN_PLACES.iter().all(|p| p.to_uppercase() == *p));
    }
}
