mod overlap_properties;
