//! The GSC MIxS biome vocabulary shipped with MGnify, frozen at load time.
//!
//! Each entry pairs the stable numeric biome id assigned by MGnify with its
//! colon-separated lineage path. Ids are never reused, so this table only
//! ever grows between releases.

/// Biome id to lineage path, one entry per node of the biome forest.
pub(crate) const BIOME_LINEAGES: &[(u32, &str)] = &[
    (0, "root"),
    (1, "root:Engineered"),
    (2, "root:Engineered:Biogas plant"),
    (3, "root:Engineered:Biogas plant:Wet fermentation"),
    (4, "root:Engineered:Bioreactor"),
    (5, "root:Engineered:Bioreactor:Continuous culture"),
    (6, "root:Engineered:Bioreactor:Continuous culture:Marine intertidal flat sediment inoculum"),
    (7, "root:Engineered:Bioreactor:Continuous culture:Marine intertidal flat sediment inoculum:Wadden Sea-Germany"),
    (8, "root:Engineered:Bioreactor:Continuous culture:Marine sediment inoculum"),
    (9, "root:Engineered:Bioreactor:Continuous culture:Marine sediment inoculum:Wadden Sea-Germany"),
    (10, "root:Engineered:Bioremediation"),
    (11, "root:Engineered:Bioremediation:Hydrocarbon"),
    (12, "root:Engineered:Bioremediation:Hydrocarbon:Benzene"),
    (13, "root:Engineered:Bioremediation:Hydrocarbon:Benzene:Bioreactor"),
    (14, "root:Engineered:Bioremediation:Metal"),
    (15, "root:Engineered:Bioremediation:Persistent organic pollutants (POP)"),
    (16, "root:Engineered:Bioremediation:Persistent organic pollutants (POP):Polycyclic aromatic hydrocarbons"),
    (17, "root:Engineered:Bioremediation:Terephthalate"),
    (18, "root:Engineered:Bioremediation:Terephthalate:Wastewater"),
    (19, "root:Engineered:Bioremediation:Terephthalate:Wastewater:Activated sludge"),
    (20, "root:Engineered:Bioremediation:Terephthalate:Wastewater:Bioreactor"),
    (21, "root:Engineered:Bioremediation:Tetrachloroethylene and derivatives"),
    (22, "root:Engineered:Bioremediation:Tetrachloroethylene and derivatives:Chloroethene"),
    (23, "root:Engineered:Bioremediation:Tetrachloroethylene and derivatives:Chloroethene:Bioreactor"),
    (24, "root:Engineered:Bioremediation:Tetrachloroethylene and derivatives:Tetrachloroethylene"),
    (25, "root:Engineered:Bioremediation:Tetrachloroethylene and derivatives:Tetrachloroethylene:Bioreactor"),
    (26, "root:Engineered:Biotransformation"),
    (27, "root:Engineered:Biotransformation:Microbial enhanced oil recovery"),
    (28, "root:Engineered:Biotransformation:Microbial solubilization of coal"),
    (29, "root:Engineered:Biotransformation:Mixed alcohol bioreactor"),
    (30, "root:Engineered:Built environment"),
    (31, "root:Engineered:Food production"),
    (32, "root:Engineered:Food production:Dairy products"),
    (33, "root:Engineered:Food production:Fermented beverages"),
    (34, "root:Engineered:Food production:Fermented seafood"),
    (35, "root:Engineered:Food production:Fermented vegetables"),
    (36, "root:Engineered:Food production:Silage fermentation"),
    (37, "root:Engineered:Industrial production"),
    (38, "root:Engineered:Industrial production:Engineered product"),
    (39, "root:Engineered:Lab enrichment"),
    (40, "root:Engineered:Lab enrichment:Defined media"),
    (41, "root:Engineered:Lab enrichment:Defined media:Aerobic media"),
    (42, "root:Engineered:Lab enrichment:Defined media:Anaerobic media"),
    (43, "root:Engineered:Lab enrichment:Defined media:Marine media"),
    (44, "root:Engineered:Lab enrichment:Defined media:Marine media:Algoconsortia"),
    (45, "root:Engineered:Lab enrichment:Undefined media"),
    (46, "root:Engineered:Lab Synthesis"),
    (47, "root:Engineered:Lab Synthesis:Genetic cross"),
    (48, "root:Engineered:Modeled"),
    (49, "root:Engineered:Modeled:Simulated communities (DNA mixture)"),
    (50, "root:Engineered:Modeled:Simulated communities (microbial mixture)"),
    (51, "root:Engineered:Modeled:Simulated communities (sequence read mixture)"),
    (52, "root:Engineered:Modeled:Simulated communities (sequence read mixture):Sanger"),
    (53, "root:Engineered:Solid waste"),
    (54, "root:Engineered:Solid waste:Composting"),
    (55, "root:Engineered:Solid waste:Composting:Grass"),
    (56, "root:Engineered:Solid waste:Composting:Grass:Bioreactor"),
    (57, "root:Engineered:Solid waste:Composting:Bioreactor"),
    (58, "root:Engineered:Solid waste:Composting:Wood"),
    (59, "root:Engineered:Solid waste:Composting:Wood:Bioreactor"),
    (60, "root:Engineered:Solid waste:Landfill"),
    (61, "root:Engineered:Solid waste:Solid animal waste"),
    (62, "root:Engineered:Wastewater"),
    (63, "root:Engineered:Wastewater:Activated Sludge"),
    (64, "root:Engineered:Wastewater:Industrial wastewater"),
    (65, "root:Engineered:Wastewater:Industrial wastewater:Agricultural wastewater"),
    (66, "root:Engineered:Wastewater:Industrial wastewater:Landfill leachate"),
    (67, "root:Engineered:Wastewater:Industrial wastewater:Mine water"),
    (68, "root:Engineered:Wastewater:Industrial wastewater:Petrochemical"),
    (69, "root:Engineered:Wastewater:Industrial wastewater:Pulp and paper wastewater"),
    (70, "root:Engineered:Wastewater:Nutrient removal"),
    (71, "root:Engineered:Wastewater:Nutrient removal:Biological phosphorus removal"),
    (72, "root:Engineered:Wastewater:Nutrient removal:Biological phosphorus removal:Activated sludge"),
    (73, "root:Engineered:Wastewater:Nutrient removal:Biological phosphorus removal:Bioreactor"),
    (74, "root:Engineered:Wastewater:Nutrient removal:Dissolved organics (aerobic)"),
    (75, "root:Engineered:Wastewater:Nutrient removal:Dissolved organics (aerobic):Activated sludge"),
    (76, "root:Engineered:Wastewater:Nutrient removal:Dissolved organics (anaerobic)"),
    (77, "root:Engineered:Wastewater:Nutrient removal:Dissolved organics (anaerobic):Activated sludge"),
    (78, "root:Engineered:Wastewater:Nutrient removal:Nitrogen removal"),
    (79, "root:Engineered:Wastewater:Nutrient removal:Nitrogen removal:Anammox"),
    (80, "root:Engineered:Wastewater:Water and sludge"),
    (81, "root:Environmental"),
    (82, "root:Environmental:Air"),
    (83, "root:Environmental:Air:Indoor Air"),
    (84, "root:Environmental:Air:Outdoor Air"),
    (85, "root:Environmental:Aquatic"),
    (86, "root:Environmental:Aquatic:Aquaculture"),
    (87, "root:Environmental:Aquatic:Estuary"),
    (88, "root:Environmental:Aquatic:Estuary:Sediment"),
    (89, "root:Environmental:Aquatic:Freshwater"),
    (90, "root:Environmental:Aquatic:Freshwater:Drinking water"),
    (91, "root:Environmental:Aquatic:Freshwater:Drinking water:Chlorinated"),
    (92, "root:Environmental:Aquatic:Freshwater:Drinking water:Delivery networks"),
    (93, "root:Environmental:Aquatic:Freshwater:Groundwater"),
    (94, "root:Environmental:Aquatic:Freshwater:Groundwater:Acid Mine Drainage"),
    (95, "root:Environmental:Aquatic:Freshwater:Groundwater:Biofilm"),
    (96, "root:Environmental:Aquatic:Freshwater:Groundwater:Cave water"),
    (97, "root:Environmental:Aquatic:Freshwater:Groundwater:Coalbed water"),
    (98, "root:Environmental:Aquatic:Freshwater:Groundwater:Contaminated"),
    (99, "root:Environmental:Aquatic:Freshwater:Groundwater:Mine"),
    (100, "root:Environmental:Aquatic:Freshwater:Groundwater:Mine drainage"),
    (101, "root:Environmental:Aquatic:Freshwater:Ice"),
    (102, "root:Environmental:Aquatic:Freshwater:Ice:Glacial lake"),
    (103, "root:Environmental:Aquatic:Freshwater:Ice:Glacier"),
    (104, "root:Environmental:Aquatic:Freshwater:Ice:Ice accretions"),
    (105, "root:Environmental:Aquatic:Freshwater:Lake"),
    (106, "root:Environmental:Aquatic:Freshwater:Lentic"),
    (107, "root:Environmental:Aquatic:Freshwater:Lentic:Epilimnion"),
    (108, "root:Environmental:Aquatic:Freshwater:Lentic:Hypolimnion"),
    (109, "root:Environmental:Aquatic:Freshwater:Lentic:Limnetic zone"),
    (110, "root:Environmental:Aquatic:Freshwater:Lentic:Littoral zone"),
    (111, "root:Environmental:Aquatic:Freshwater:Lentic:Sediment"),
    (112, "root:Environmental:Aquatic:Freshwater:Lotic"),
    (113, "root:Environmental:Aquatic:Freshwater:Lotic:Acidic"),
    (114, "root:Environmental:Aquatic:Freshwater:Lotic:Low land river systems"),
    (115, "root:Environmental:Aquatic:Freshwater:Lotic:Microbial mats"),
    (116, "root:Environmental:Aquatic:Freshwater:Lotic:Mid stream"),
    (117, "root:Environmental:Aquatic:Freshwater:Lotic:Sediment"),
    (118, "root:Environmental:Aquatic:Freshwater:Microbialites"),
    (119, "root:Environmental:Aquatic:Freshwater:Pond"),
    (120, "root:Environmental:Aquatic:Freshwater:Pond:Sediment"),
    (121, "root:Environmental:Aquatic:Freshwater:Sediment"),
    (122, "root:Environmental:Aquatic:Freshwater:Storm water"),
    (123, "root:Environmental:Aquatic:Freshwater:Storm water:Drainage pipe biofilm"),
    (124, "root:Environmental:Aquatic:Freshwater:Subglacial lake"),
    (125, "root:Environmental:Aquatic:Freshwater:Wetlands"),
    (126, "root:Environmental:Aquatic:Freshwater:Wetlands:Bog"),
    (127, "root:Environmental:Aquatic:Freshwater:Wetlands:Marsh"),
    (128, "root:Environmental:Aquatic:Freshwater:Wetlands:Sediment"),
    (129, "root:Environmental:Aquatic:Freshwater:Wetlands:Swamp"),
    (130, "root:Environmental:Aquatic:Lentic"),
    (131, "root:Environmental:Aquatic:Lentic:Brackish"),
    (132, "root:Environmental:Aquatic:Marine"),
    (133, "root:Environmental:Aquatic:Marine:Brackish"),
    (134, "root:Environmental:Aquatic:Marine:Coastal"),
    (135, "root:Environmental:Aquatic:Marine:Coastal:Sediment"),
    (136, "root:Environmental:Aquatic:Marine:Cold seeps"),
    (137, "root:Environmental:Aquatic:Marine:Cold seeps:Sediment"),
    (138, "root:Environmental:Aquatic:Marine:Fossil"),
    (139, "root:Environmental:Aquatic:Marine:Fossil:Whale fall"),
    (140, "root:Environmental:Aquatic:Marine:Hydrothermal vents"),
    (141, "root:Environmental:Aquatic:Marine:Hydrothermal vents:Black smokers"),
    (142, "root:Environmental:Aquatic:Marine:Hydrothermal vents:Diffuse flow"),
    (143, "root:Environmental:Aquatic:Marine:Hydrothermal vents:Microbial mats"),
    (144, "root:Environmental:Aquatic:Marine:Hydrothermal vents:Sediment"),
    (145, "root:Environmental:Aquatic:Marine:Intertidal zone"),
    (146, "root:Environmental:Aquatic:Marine:Intertidal zone:Beach"),
    (147, "root:Environmental:Aquatic:Marine:Intertidal zone:Coral reef"),
    (148, "root:Environmental:Aquatic:Marine:Intertidal zone:Estuary"),
    (149, "root:Environmental:Aquatic:Marine:Intertidal zone:Mangrove swamp"),
    (150, "root:Environmental:Aquatic:Marine:Intertidal zone:Microbialites"),
    (151, "root:Environmental:Aquatic:Marine:Intertidal zone:Oil-contaminated"),
    (152, "root:Environmental:Aquatic:Marine:Intertidal zone:Salt marsh"),
    (153, "root:Environmental:Aquatic:Marine:Intertidal zone:Sediment"),
    (154, "root:Environmental:Aquatic:Marine:Marginal Sea"),
    (155, "root:Environmental:Aquatic:Marine:Neritic zone"),
    (156, "root:Environmental:Aquatic:Marine:Neritic zone:Oil-contaminated sediment"),
    (157, "root:Environmental:Aquatic:Marine:Neritic zone:Sediment"),
    (158, "root:Environmental:Aquatic:Marine:Oceanic"),
    (159, "root:Environmental:Aquatic:Marine:Oceanic:Abyssal plane"),
    (160, "root:Environmental:Aquatic:Marine:Oceanic:Aphotic zone"),
    (161, "root:Environmental:Aquatic:Marine:Oceanic:Benthic"),
    (162, "root:Environmental:Aquatic:Marine:Oceanic:Oil-contaminated"),
    (163, "root:Environmental:Aquatic:Marine:Oceanic:Oil-contaminated sediments"),
    (164, "root:Environmental:Aquatic:Marine:Oceanic:Photic zone"),
    (165, "root:Environmental:Aquatic:Marine:Oceanic:Sediment"),
    (166, "root:Environmental:Aquatic:Marine:Oil field"),
    (167, "root:Environmental:Aquatic:Marine:Oil field:bore hole"),
    (168, "root:Environmental:Aquatic:Marine:Oil seeps"),
    (169, "root:Environmental:Aquatic:Marine:Pelagic"),
    (170, "root:Environmental:Aquatic:Marine:Oil-contaminated sediment"),
    (171, "root:Environmental:Aquatic:Marine:Sediment"),
    (172, "root:Environmental:Aquatic:Marine:Volcanic"),
    (173, "root:Environmental:Aquatic:Marine:Wetlands"),
    (174, "root:Environmental:Aquatic:Marine:Wetlands:Sediment"),
    (175, "root:Environmental:Aquatic:Meromictic lake"),
    (176, "root:Environmental:Aquatic:Non-marine Saline and Alkaline"),
    (177, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Alkaline"),
    (178, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Alkaline:Carbonate"),
    (179, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Alkaline:Microbial mats"),
    (180, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Alkaline:Sediment"),
    (181, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Hypersaline"),
    (182, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Hypersaline:Microbial mats"),
    (183, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Hypersaline:Sediment"),
    (184, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Near-boiling (>90C)"),
    (185, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Near-boiling (>90C):Alkaline"),
    (186, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Saline"),
    (187, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Saline:Athalassic"),
    (188, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Saline:Epilimnion"),
    (189, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Saline:Hypolimnion"),
    (190, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Saline:Microbial mats"),
    (191, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Saline:Sediment"),
    (192, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Saline:Thalassic"),
    (193, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Salt crystallizer pond"),
    (194, "root:Environmental:Aquatic:Non-marine Saline and Alkaline:Salt crystallizer pond:Microbial mats"),
    (195, "root:Environmental:Aquatic:Sediment"),
    (196, "root:Environmental:Aquatic:Thermal springs"),
    (197, "root:Environmental:Aquatic:Thermal springs:Hot (42-90C)"),
    (198, "root:Environmental:Aquatic:Thermal springs:Hot (42-90C):Acidic"),
    (199, "root:Environmental:Aquatic:Thermal springs:Hot (42-90C):Alkaline"),
    (200, "root:Environmental:Aquatic:Thermal springs:Hot (42-90C):Neutral"),
    (201, "root:Environmental:Aquatic:Thermal springs:Hot (42-90C):Sediment"),
    (202, "root:Environmental:Aquatic:Thermal springs:Near-boiling (>90C)"),
    (203, "root:Environmental:Aquatic:Thermal springs:Near-boiling (>90C):Alkaline"),
    (204, "root:Environmental:Aquatic:Thermal springs:Sediment"),
    (205, "root:Environmental:Aquatic:Thermal springs:Tepid (25-34C)"),
    (206, "root:Environmental:Aquatic:Thermal springs:Tepid (25-34C):Sediment"),
    (207, "root:Environmental:Aquatic:Thermal springs:Warm (34-42C)"),
    (208, "root:Environmental:Aquatic:Thermal springs:Warm (34-42C):Neutral"),
    (209, "root:Environmental:Aquatic:Thermal springs:Warm (34-42C):Sediment"),
    (210, "root:Environmental:Terrestrial"),
    (211, "root:Environmental:Terrestrial:Agricultural field"),
    (212, "root:Environmental:Terrestrial:Asphalt lakes"),
    (213, "root:Environmental:Terrestrial:Asphalt lakes:Tar"),
    (214, "root:Environmental:Terrestrial:Deep subsurface"),
    (215, "root:Environmental:Terrestrial:Deep subsurface:Clay"),
    (216, "root:Environmental:Terrestrial:Geologic"),
    (217, "root:Environmental:Terrestrial:Geologic:Mine"),
    (218, "root:Environmental:Terrestrial:Oil reservoir"),
    (219, "root:Environmental:Terrestrial:Rock-dwelling (subaerial biofilm)"),
    (220, "root:Environmental:Terrestrial:Soil"),
    (221, "root:Environmental:Terrestrial:Soil:Clay"),
    (222, "root:Environmental:Terrestrial:Soil:Clay:Agricultural land"),
    (223, "root:Environmental:Terrestrial:Soil:Clay:Contaminated"),
    (224, "root:Environmental:Terrestrial:Soil:Clay:Grasslands"),
    (225, "root:Environmental:Terrestrial:Soil:Clay:Oil-contaminated"),
    (226, "root:Environmental:Terrestrial:Soil:Crop"),
    (227, "root:Environmental:Terrestrial:Soil:Crop:Agricultural land"),
    (228, "root:Environmental:Terrestrial:Soil:Loam"),
    (229, "root:Environmental:Terrestrial:Soil:Loam:Agricultural"),
    (230, "root:Environmental:Terrestrial:Soil:Loam:Contaminated"),
    (231, "root:Environmental:Terrestrial:Soil:Loam:Forest soil"),
    (232, "root:Environmental:Terrestrial:Soil:Loam:Grasslands"),
    (233, "root:Environmental:Terrestrial:Soil:Sand"),
    (234, "root:Environmental:Terrestrial:Soil:Sand:Desert"),
    (235, "root:Environmental:Terrestrial:Soil:Sand:Forest soil"),
    (236, "root:Environmental:Terrestrial:Soil:Sand:Grasslands"),
    (237, "root:Environmental:Terrestrial:Soil:Sand:Oil-contaminated"),
    (238, "root:Environmental:Terrestrial:Soil:Silt"),
    (239, "root:Environmental:Terrestrial:Soil:Agricultural"),
    (240, "root:Environmental:Terrestrial:Soil:Boreal forest"),
    (241, "root:Environmental:Terrestrial:Soil:Contaminated"),
    (242, "root:Environmental:Terrestrial:Soil:Desert"),
    (243, "root:Environmental:Terrestrial:Soil:Forest soil"),
    (244, "root:Environmental:Terrestrial:Soil:Grasslands"),
    (245, "root:Environmental:Terrestrial:Soil:Mine"),
    (246, "root:Environmental:Terrestrial:Soil:Mine drainage"),
    (247, "root:Environmental:Terrestrial:Soil:Oil-contaminated"),
    (248, "root:Environmental:Terrestrial:Soil:Permafrost"),
    (249, "root:Environmental:Terrestrial:Soil:Shrubland"),
    (250, "root:Environmental:Terrestrial:Soil:Tropical rainforest"),
    (251, "root:Environmental:Terrestrial:Soil:Uranium contaminated"),
    (252, "root:Environmental:Terrestrial:Soil:Viriome"),
    (253, "root:Environmental:Terrestrial:Soil:Wetlands"),
    (254, "root:Environmental:Terrestrial:Soil:Wetlands:Permafrost"),
    (255, "root:Environmental:Terrestrial:Volcanic"),
    (256, "root:Environmental:Terrestrial:Volcanic:Fumaroles"),
    (257, "root:Host-associated"),
    (258, "root:Host-associated:Algae"),
    (259, "root:Host-associated:Algae:Brown Algae"),
    (260, "root:Host-associated:Algae:Green algae"),
    (261, "root:Host-associated:Algae:Green algae:Ectosymbionts"),
    (262, "root:Host-associated:Algae:Red algae"),
    (263, "root:Host-associated:Algae:Red algae:Ectosymbionts"),
    (264, "root:Host-associated:Amphibia"),
    (265, "root:Host-associated:Amphibia:Digestive system"),
    (266, "root:Host-associated:Amphibia:Excretory system"),
    (267, "root:Host-associated:Animal"),
    (268, "root:Host-associated:Animal:Circulatory system"),
    (269, "root:Host-associated:Animal:Digestive system"),
    (270, "root:Host-associated:Animal:Digestive system:Fecal"),
    (271, "root:Host-associated:Animal:Fossil"),
    (272, "root:Host-associated:Animal:Fossil:Bone"),
    (273, "root:Host-associated:Animal:Fossil:Feces"),
    (274, "root:Host-associated:Animal:Reproductive system"),
    (275, "root:Host-associated:Animal:Respiratory system"),
    (276, "root:Host-associated:Animal:Skin"),
    (277, "root:Host-associated:Annelida"),
    (278, "root:Host-associated:Annelida:Digestive system"),
    (279, "root:Host-associated:Annelida:Digestive system:Digestive tube"),
    (280, "root:Host-associated:Annelida:Digestive system:Digestive tube:Extracellular symbionts"),
    (281, "root:Host-associated:Annelida:Integument"),
    (282, "root:Host-associated:Annelida:Integument:Cuticle"),
    (283, "root:Host-associated:Annelida:Integument:Cuticle:Epibionts"),
    (284, "root:Host-associated:Annelida:Integument:Subcuticular space"),
    (285, "root:Host-associated:Annelida:Integument:Subcuticular space:Extracellular symbionts"),
    (286, "root:Host-associated:Annelida:Intracellular endosymbionts"),
    (287, "root:Host-associated:Annelida:Intracellular endosymbionts:Trophosome"),
    (288, "root:Host-associated:Annelida:Reproductive system"),
    (289, "root:Host-associated:Annelida:Reproductive system:Egg capsule"),
    (290, "root:Host-associated:Annelida:Reproductive system:Egg capsule:Extracellular"),
    (291, "root:Host-associated:Arthropoda"),
    (292, "root:Host-associated:Arthropoda:Digestive system"),
    (293, "root:Host-associated:Arthropoda:Digestive system:Foregut"),
    (294, "root:Host-associated:Arthropoda:Digestive system:Gut"),
    (295, "root:Host-associated:Arthropoda:Digestive system:Gut:P3 segment"),
    (296, "root:Host-associated:Arthropoda:Digestive system:Gut:Proctodeal segment"),
    (297, "root:Host-associated:Arthropoda:Digestive system:Hindgut"),
    (298, "root:Host-associated:Arthropoda:Digestive system:Hindgut:P1 segment"),
    (299, "root:Host-associated:Arthropoda:Digestive system:Hindgut:P3 segment"),
    (300, "root:Host-associated:Arthropoda:Digestive system:Midgut"),
    (301, "root:Host-associated:Arthropoda:Digestive system:Oral"),
    (302, "root:Host-associated:Arthropoda:Digestive system:Oral:Saliva"),
    (303, "root:Host-associated:Arthropoda:Integument"),
    (304, "root:Host-associated:Arthropoda:Integument:Cuticle"),
    (305, "root:Host-associated:Arthropoda:Integument:Cuticle:Thoracic segments"),
    (306, "root:Host-associated:Arthropoda:Intracellular endosymbionts"),
    (307, "root:Host-associated:Arthropoda:Intracellular endosymbionts:Primary"),
    (308, "root:Host-associated:Arthropoda:Intracellular endosymbionts:Primary:Bacteriomes"),
    (309, "root:Host-associated:Arthropoda:Intracellular endosymbionts:Secondary"),
    (310, "root:Host-associated:Arthropoda:Oral cavity"),
    (311, "root:Host-associated:Arthropoda:Respiratory system"),
    (312, "root:Host-associated:Arthropoda:Respiratory system:Gills"),
    (313, "root:Host-associated:Arthropoda:Symbiotic fungal gardens and galleries"),
    (314, "root:Host-associated:Arthropoda:Symbiotic fungal gardens and galleries:Fungus gallery"),
    (315, "root:Host-associated:Arthropoda:Symbiotic fungal gardens and galleries:Fungus garden"),
    (316, "root:Host-associated:Arthropoda:Symbiotic fungal gardens and galleries:Fungus garden:Garden dump"),
    (317, "root:Host-associated:Arthropoda:Venom gland"),
    (318, "root:Host-associated:Arthropoda:Venom gland:Venom"),
    (319, "root:Host-associated:Birds"),
    (320, "root:Host-associated:Birds:Circulatory system"),
    (321, "root:Host-associated:Birds:Circulatory system:Blood"),
    (322, "root:Host-associated:Birds:Digestive system"),
    (323, "root:Host-associated:Birds:Digestive system:Ceca"),
    (324, "root:Host-associated:Birds:Digestive system:Ceca:Lumen"),
    (325, "root:Host-associated:Birds:Digestive system:Crop"),
    (326, "root:Host-associated:Birds:Digestive system:Crop:Lumen"),
    (327, "root:Host-associated:Birds:Digestive system:Digestive tube"),
    (328, "root:Host-associated:Birds:Digestive system:Digestive tube:Cecum"),
    (329, "root:Host-associated:Birds:Digestive system:Fecal"),
    (330, "root:Host-associated:Birds:Digestive system:Small intestine"),
    (331, "root:Host-associated:Birds:Digestive system:Small intestine:Duodenal"),
    (332, "root:Host-associated:Birds:Reproductive system"),
    (333, "root:Host-associated:Birds:Respiratory system"),
    (334, "root:Host-associated:Birds:Respiratory system:Lungs"),
    (335, "root:Host-associated:Cnidaria"),
    (336, "root:Host-associated:Echinodermata"),
    (337, "root:Host-associated:Endosymbionts"),
    (338, "root:Host-associated:Endosymbionts:Fungi"),
    (339, "root:Host-associated:Endosymbionts:Fungi:Endosymbionts"),
    (340, "root:Host-associated:Fish"),
    (341, "root:Host-associated:Fish:Circulatory system"),
    (342, "root:Host-associated:Fish:Circulatory system:Blood"),
    (343, "root:Host-associated:Fish:Digestive system"),
    (344, "root:Host-associated:Fish:Digestive system:Foregut"),
    (345, "root:Host-associated:Fish:Digestive system:Foregut:Uncharacterized"),
    (346, "root:Host-associated:Fish:Digestive system:Intestine"),
    (347, "root:Host-associated:Fish:Excretory system"),
    (348, "root:Host-associated:Fish:Excretory system:Kidneys"),
    (349, "root:Host-associated:Fish:Reproductive system"),
    (350, "root:Host-associated:Fish:Skin"),
    (351, "root:Host-associated:Fish:Skin:Slime"),
    (352, "root:Host-associated:Fungi"),
    (353, "root:Host-associated:Human"),
    (354, "root:Host-associated:Human:Circulatory system"),
    (355, "root:Host-associated:Human:Circulatory system:Blood"),
    (356, "root:Host-associated:Human:Digestive system"),
    (357, "root:Host-associated:Human:Digestive system:Hindgut"),
    (358, "root:Host-associated:Human:Digestive system:Hindgut:Rectum"),
    (359, "root:Host-associated:Human:Digestive system:Intestine"),
    (360, "root:Host-associated:Human:Digestive system:Large intestine"),
    (361, "root:Host-associated:Human:Digestive system:Large intestine:Fecal"),
    (362, "root:Host-associated:Human:Digestive system:Large intestine:Sigmoid colon"),
    (363, "root:Host-associated:Human:Digestive system:Oral"),
    (364, "root:Host-associated:Human:Digestive system:Oral:Attached Keratinized gingiva"),
    (365, "root:Host-associated:Human:Digestive system:Oral:buccal mucosa"),
    (366, "root:Host-associated:Human:Digestive system:Oral:hard palate"),
    (367, "root:Host-associated:Human:Digestive system:Oral:Palatine tonsils"),
    (368, "root:Host-associated:Human:Digestive system:Oral:Periodontal pockets"),
    (369, "root:Host-associated:Human:Digestive system:Oral:Saliva"),
    (370, "root:Host-associated:Human:Digestive system:Oral:Subgingival plaque"),
    (371, "Duplicate - root:Host-associated:Human:Digestive system:Oral:subgingival plaque"),
    (372, "root:Host-associated:Human:Digestive system:Oral:Supragingival plaque"),
    (373, "root:Host-associated:Human:Digestive system:Oral:Throat"),
    (374, "root:Host-associated:Human:Digestive system:Oral:tongue dorsum"),
    (375, "root:Host-associated:Human:Excretory system"),
    (376, "root:Host-associated:Human:Excretory system:Urethra"),
    (377, "root:Host-associated:Human:Excretory system:Urethra:Urine"),
    (378, "root:Host-associated:Human:Fossil"),
    (379, "root:Host-associated:Human:Fossil:Bone"),
    (380, "root:Host-associated:Human:Lympathic system"),
    (381, "root:Host-associated:Human:Lympathic system:Lymph nodes"),
    (382, "root:Host-associated:Human:Milk"),
    (383, "root:Host-associated:Human:Nervous system"),
    (384, "root:Host-associated:Human:Nervous system:Cerebrospinal fluid"),
    (385, "root:Host-associated:Human:Reproductive system"),
    (386, "root:Host-associated:Human:Reproductive system:Female"),
    (387, "root:Host-associated:Human:Reproductive system:Vagina"),
    (388, "root:Host-associated:Human:Reproductive system:Vagina:Introitus"),
    (389, "root:Host-associated:Human:Reproductive system:Vagina:Midpoint vagina"),
    (390, "root:Host-associated:Human:Reproductive system:Vagina:posterior fornix"),
    (391, "root:Host-associated:Human:Respiratory system"),
    (392, "root:Host-associated:Human:Respiratory system:Nasopharyngeal"),
    (393, "root:Host-associated:Human:Respiratory system:Nasopharyngeal:anterior nares"),
    (394, "root:Host-associated:Human:Respiratory system:Nasopharyngeal:Nasal cavity"),
    (395, "root:Host-associated:Human:Respiratory system:Nasopharyngeal:Pharynx"),
    (396, "root:Host-associated:Human:Respiratory system:Pulmonary system"),
    (397, "root:Host-associated:Human:Respiratory system:Pulmonary system:Lung"),
    (398, "root:Host-associated:Human:Respiratory system:Pulmonary system:Sputum"),
    (399, "root:Host-associated:Human:Respiratory system:Pulmonary system:Trachea"),
    (400, "root:Host-associated:Human:Respiratory system:Pulmonary system:Viriome"),
    (401, "root:Host-associated:Human:Skin"),
    (402, "root:Host-associated:Human:Skin:Axilla"),
    (403, "root:Host-associated:Human:Skin:Medial distal leg"),
    (404, "root:Host-associated:Human:Skin:Medial distal leg:Venous leg ulcers"),
    (405, "root:Host-associated:Human:Skin:Naris"),
    (406, "root:Host-associated:Human:Skin:retroauricular crease"),
    (407, "root:Host-associated:Human:Skin:Umbilicus"),
    (408, "root:Host-associated:Human:Skin:Volar forearm"),
    (409, "root:Host-associated:Insecta"),
    (410, "root:Host-associated:Insecta:Digestive system"),
    (411, "root:Host-associated:Invertebrates"),
    (412, "root:Host-associated:Invertebrates:Bryozoans"),
    (413, "root:Host-associated:Invertebrates:Bryozoans:Gymnolaemates"),
    (414, "root:Host-associated:Invertebrates:Cnidaria"),
    (415, "root:Host-associated:Invertebrates:Cnidaria:Coral"),
    (416, "root:Host-associated:Invertebrates:Echinodermata"),
    (417, "root:Host-associated:Invertebrates:Echinodermata:Sea Urchin"),
    (418, "root:Host-associated:Mammals"),
    (419, "root:Host-associated:Mammals:Circulatory system"),
    (420, "root:Host-associated:Mammals:Circulatory system:Blood"),
    (421, "root:Host-associated:Mammals:Digestive system"),
    (422, "root:Host-associated:Mammals:Digestive system:Fecal"),
    (423, "root:Host-associated:Mammals:Digestive system:Fecal:Uncharacterized"),
    (424, "root:Host-associated:Mammals:Digestive system:Foregut"),
    (425, "root:Host-associated:Mammals:Digestive system:Foregut:Rumen"),
    (426, "root:Host-associated:Mammals:Digestive system:Large intestine"),
    (427, "root:Host-associated:Mammals:Digestive system:Large intestine:Cecum"),
    (428, "root:Host-associated:Mammals:Digestive system:Large intestine:Fecal"),
    (429, "root:Host-associated:Mammals:Digestive system:Midgut"),
    (430, "root:Host-associated:Mammals:Digestive system:Oral cavity"),
    (431, "root:Host-associated:Mammals:Digestive system:Oral cavity:Buccal mucosa"),
    (432, "root:Host-associated:Mammals:Digestive system:Stomach"),
    (433, "root:Host-associated:Mammals:Digestive system:Stomach:Endoperitrophic space"),
    (434, "root:Host-associated:Mammals:Digestive system:Stomach:Rumen"),
    (435, "root:Host-associated:Mammals:Excretory system"),
    (436, "root:Host-associated:Mammals:Excretory system:Urine"),
    (437, "root:Host-associated:Mammals:Gastrointestinal tract"),
    (438, "root:Host-associated:Mammals:Gastrointestinal tract:Intestine"),
    (439, "root:Host-associated:Mammals:Gastrointestinal tract:Intestine:Fecal"),
    (440, "root:Host-associated:Mammals:Lymphatic"),
    (441, "root:Host-associated:Mammals:Lymphatic:Lymph nodes"),
    (442, "root:Host-associated:Mammals:Milk"),
    (443, "root:Host-associated:Mammals:Nervous system"),
    (444, "root:Host-associated:Mammals:Nervous system:Brain"),
    (445, "root:Host-associated:Mammals:Reproductive system"),
    (446, "root:Host-associated:Mammals:Respiratory system"),
    (447, "root:Host-associated:Mammals:Respiratory system:Nasopharyngeal"),
    (448, "root:Host-associated:Mammals:Respiratory system:Nasopharyngeal:Nasal cavity"),
    (449, "root:Host-associated:Mammals:Respiratory system:Pulmonary system"),
    (450, "root:Host-associated:Mammals:Respiratory system:Pulmonary system:Viriome"),
    (451, "root:Host-associated:Mammals:Skin"),
    (452, "root:Host-associated:Microbial"),
    (453, "root:Host-associated:Microbial:Bacteria"),
    (454, "root:Host-associated:Microbial:Dinoflagellates"),
    (455, "root:Host-associated:Microbial:Dinoflagellates:Endosymbionts"),
    (456, "root:Host-associated:Mollusca"),
    (457, "root:Host-associated:Mollusca:Digestive system"),
    (458, "root:Host-associated:Mollusca:Digestive system:Ceca"),
    (459, "root:Host-associated:Mollusca:Digestive system:Ceca:Uncharacterized"),
    (460, "root:Host-associated:Mollusca:Digestive system:Glands"),
    (461, "root:Host-associated:Mollusca:Respiratory system"),
    (462, "root:Host-associated:Mollusca:Respiratory system:Gills"),
    (463, "root:Host-associated:Mollusca:Respiratory system:Gills:Extracellular"),
    (464, "root:Host-associated:Mollusca:Respiratory system:Gills:Intracellular"),
    (465, "root:Host-associated:Mollusca:Shell"),
    (466, "root:Host-associated:Plants"),
    (467, "root:Host-associated:Plants:Phylloplane"),
    (468, "root:Host-associated:Plants:Phylloplane:Endophytes"),
    (469, "root:Host-associated:Plants:Phylloplane:Epiphytes"),
    (470, "root:Host-associated:Plants:Rhizome"),
    (471, "root:Host-associated:Plants:Rhizome:Epiphytes"),
    (472, "root:Host-associated:Plants:Rhizoplane"),
    (473, "root:Host-associated:Plants:Rhizoplane:Endophytes"),
    (474, "root:Host-associated:Plants:Rhizoplane:Epiphytes"),
    (475, "root:Host-associated:Plants:Rhizoplane:Soil"),
    (476, "root:Host-associated:Plants:Rhizosphere"),
    (477, "root:Host-associated:Plants:Rhizosphere:Epiphytes"),
    (478, "root:Host-associated:Plants:Rhizosphere:Soil"),
    (479, "root:Host-associated:Plants:Rhizosphere:Forest soil"),
    (480, "root:Host-associated:Plants:Root"),
    (481, "root:Host-associated:Porifera"),
    (482, "root:Host-associated:Protists"),
    (483, "root:Host-associated:Protozoa"),
    (484, "root:Host-associated:Reptile"),
    (485, "root:Host-associated:Reptile:Oral cavity"),
    (486, "root:Host-associated:Reptile:Oral cavity:Venom gland"),
    (487, "root:Host-associated:Reptile:Oral cavity:Venom gland:Venom"),
    (488, "root:Host-associated:Spiralia"),
    (489, "root:Host-associated:Tunicates"),
    (490, "root:Host-associated:Tunicates:Ascidians"),
    (491, "root:Control"),
    (492, "root:Mixed"),
];
