mod temporal_properties;
