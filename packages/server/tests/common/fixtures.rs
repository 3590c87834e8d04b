use tablefinder_core::domains::locations::PostcodeIndex;

pub const POSTCODES_CSV: &str = "\
postcode,locality,state,long,lat
2042,NEWTOWN,NSW,151.179,-33.897
2042,ENMORE,NSW,151.173,-33.900
2010,SURRY HILLS,NSW,151.211,-33.886
3065,FITZROY,VIC,144.978,-37.798
";

pub fn postcode_index() -> PostcodeIndex {
    PostcodeIndex::from_reader(POSTCODES_CSV.as_bytes()).expect("fixture CSV parses")
}
