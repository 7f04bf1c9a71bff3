//! Shared fixtures for unit tests.

/// A trimmed pyrexMD search index in the exact form Sphinx writes it, unquoted keys included.
pub const SAMPLE_INDEX: &str = concat!(
    "Search.setIndex({docnames:[\"pyrexMD.rex\",\"pyrexMD.gmx\",\"pyrexMD.analysis\"],",
    "envversion:{\"sphinx.domains.python\":3,\"sphinx.ext.viewcode\":1,sphinx:56},",
    "filenames:[\"pyrexMD.rex.rst\",\"pyrexMD.gmx.rst\",\"pyrexMD.analysis.rst\"],",
    "objects:{",
    "\"\":{pyrexMD:[0,0,0,\"-\"]},",
    "\"pyrexMD\":{gmx:[1,0,0,\"-\"],rex:[0,0,0,\"-\"]},",
    "\"pyrexMD.analysis\":{gdt:[2,0,0,\"-\"]},",
    "\"pyrexMD.analysis.gdt\":{GDT:[2,1,1,\"\"],get_GDT_TS:[2,1,1,\"\"],PLOT:[2,2,2,\"\"]},",
    "\"pyrexMD.gmx\":{get_RMSD:[1,1,1,\"\"],grompp:[1,1,1,\"\"],mdrun:[1,1,1,\"\"]},",
    "\"pyrexMD.rex\":{_helper:[0,1,-1,\"\"],get_REX_DIRS:[0,1,1,\"\"],setup_REX:[0,1,1,\"\"]}",
    "},",
    "objnames:{\"0\":[\"py\",\"module\",\"Python module\"],\"1\":[\"py\",\"function\",\"Python function\"],",
    "\"2\":[\"py\",\"class\",\"Python class\"]},",
    "objtypes:{\"0\":\"py:module\",\"1\":\"py:function\",\"2\":\"py:class\"},",
    "terms:{\"class\":2,exchang:0,gdt:2,get_gdt_t:2,get_rex_dir:0,get_rmsd:[1,2],gromac:[0,1],",
    "grompp:1,mdrun:1,replica:0,rmsd:[1,2],setup:[0,1],setup_rex:0,the:[0,1,2],topolog:1},",
    "titles:[\"pyrexMD.rex\",\"pyrexMD.gmx\",\"pyrexMD.analysis\"],",
    "titleterms:{analysi:2,gmx:1,pyrexmd:[0,1,2],rex:0}})",
);

/// An excerpt of the pyrexMD documentation build's index, cut from the generated file without
/// reformatting. Keeps the full document, environment and type tables, bare group keys and
/// `\uXXXX` escapes in titles.
pub const PYREXMD_DOCS_INDEX: &str = concat!(
    r#"Search.setIndex({docnames:["about_pyrexMD","index","modules","pyrexMD","pyrexMD.analysis","pyrexMD.decoy","pyrexMD.misc","quick_guide"],"#,
    r#"envversion:{"sphinx.domains.c":2,"sphinx.domains.changeset":1,"sphinx.domains.citation":1,"sphinx.domains.cpp":4,"sphinx.domains.index":1,"sphinx.domains.javascript":2,"sphinx.domains.math":2,"sphinx.domains.python":3,"sphinx.domains.rst":2,"sphinx.domains.std":2,"sphinx.ext.intersphinx":1,"sphinx.ext.todo":2,"sphinx.ext.viewcode":1,sphinx:56},"#,
    r#"filenames:["about_pyrexMD.rst","index.rst","modules.rst","pyrexMD.rst","pyrexMD.analysis.rst","pyrexMD.decoy.rst","pyrexMD.misc.rst","quick_guide.rst"],"#,
    r#"objects:{"pyrexMD.analysis":{analysis:[4,0,0,"-"],contacts:[4,0,0,"-"],dihedrals:[4,0,0,"-"],gdt:[4,0,0,"-"]},"#,
    r#""pyrexMD.gmx":{get_RMSD:[3,1,1,""],grompp:[3,1,1,""],mdrun:[3,1,1,""]},"#,
    r#"pyrexMD:{core:[3,0,0,"-"],gmx:[3,0,0,"-"],rex:[3,0,0,"-"],topology:[3,0,0,"-"]}},"#,
    r#"objnames:{"0":["py","module","Python module"],"1":["py","function","Python function"],"2":["py","data","Python data"],"3":["py","class","Python class"],"4":["py","method","Python method"],"5":["py","exception","Python exception"]},"#,
    r#"objtypes:{"0":"py:module","1":"py:function","2":"py:data","3":"py:class","4":"py:method","5":"py:exception"},"#,
    r#"terms:{"class":[2,3,4,7],exchang:[0,3,7],fasta:4,gdt:[2,3],get_rmsd:[3,4,7],grompp:[3,7],pyrexmd:7,replica:[0,3,7],rmsd:[0,3,4,7]},"#,
    r#"titles:["About pyrexMD","Welcome to pyrexMD\u2019s documentation!","pyrexMD","pyrexMD.core","pyrexMD.analysis","pyrexMD.decoy","pyrexMD.misc","Quick Guide"],"#,
    r#"titleterms:{"class":6,about:0,analysi:4,gdt:[4,7],gmx:3,pyrexmd:[0,1,2,3,4,5,6],rex:[3,7],welcom:1}})"#,
);
